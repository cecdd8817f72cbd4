//! Read-only geometry snapshots of scene objects.
//!
//! The host builds one [`SceneObject`] per shape on the canvas before each
//! pointer-move evaluation. The engine only ever reads them.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a scene object.
pub type ObjectId = Uuid;

/// Whether an object may take part in alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignability {
    /// Regular shape, used for guides and distances.
    #[default]
    Alignable,
    /// A guide or measurement drawn by the overlay itself.
    GuideArtifact,
    /// Geometry without stable bounds semantics (connectors, edges).
    NonAlignable,
}

/// Axis-aligned bounding box snapshot of a shape on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    id: ObjectId,
    /// Left edge in canvas coordinates.
    pub left: f64,
    /// Top edge in canvas coordinates.
    pub top: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Hidden objects never align.
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub alignability: Alignability,
}

fn default_visible() -> bool {
    true
}

impl SceneObject {
    /// Create a visible, alignable object with a fresh ID.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::with_id(Uuid::new_v4(), left, top, width, height)
    }

    /// Create an object carrying the host's own ID.
    pub fn with_id(id: ObjectId, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            left,
            top,
            width,
            height,
            visible: true,
            alignability: Alignability::Alignable,
        }
    }

    /// Create an object from a kurbo rect.
    pub fn from_rect(id: ObjectId, rect: Rect) -> Self {
        let rect = rect.abs();
        Self::with_id(id, rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Set the visibility flag.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the alignability tag.
    pub fn with_alignability(mut self, alignability: Alignability) -> Self {
        self.alignability = alignability;
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }

    /// True for overlay artifacts (guide lines, labels).
    pub fn is_guide_artifact(&self) -> bool {
        self.alignability == Alignability::GuideArtifact
    }

    /// True for connectors and other objects excluded from alignment.
    pub fn is_non_alignable(&self) -> bool {
        self.alignability == Alignability::NonAlignable
    }

    /// Whether this object can contribute guides or measurements at all.
    pub fn participates(&self) -> bool {
        self.visible && self.alignability == Alignability::Alignable
    }

    /// Copy of this object with its top-left corner at `origin`.
    pub fn moved_to(&self, origin: Point) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            ..*self
        }
    }

    /// Copy of this object translated by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        self.moved_to(self.origin() + delta)
    }

    /// Whether every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_edges() {
        let obj = SceneObject::new(10.0, 20.0, 100.0, 50.0);
        assert!((obj.right() - 110.0).abs() < f64::EPSILON);
        assert!((obj.bottom() - 70.0).abs() < f64::EPSILON);
        assert!((obj.center_x() - 60.0).abs() < f64::EPSILON);
        assert!((obj.center_y() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_matches_edges() {
        let obj = SceneObject::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(obj.bounds(), Rect::new(10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn test_from_rect_normalizes() {
        let id = Uuid::new_v4();
        let obj = SceneObject::from_rect(id, Rect::new(100.0, 80.0, 50.0, 40.0));
        assert_eq!(obj.id(), id);
        assert!((obj.left - 50.0).abs() < f64::EPSILON);
        assert!((obj.top - 40.0).abs() < f64::EPSILON);
        assert!((obj.width - 50.0).abs() < f64::EPSILON);
        assert!((obj.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tags() {
        let obj = SceneObject::new(0.0, 0.0, 10.0, 10.0);
        assert!(obj.participates());

        let connector = obj.with_alignability(Alignability::NonAlignable);
        assert!(connector.is_non_alignable());
        assert!(!connector.is_guide_artifact());
        assert!(!connector.participates());

        let guide = obj.with_alignability(Alignability::GuideArtifact);
        assert!(guide.is_guide_artifact());
        assert!(!guide.participates());

        assert!(!obj.with_visible(false).participates());
    }

    #[test]
    fn test_moved_to_keeps_identity_and_size() {
        let obj = SceneObject::new(10.0, 20.0, 30.0, 40.0);
        let moved = obj.moved_to(Point::new(100.0, 200.0));
        assert_eq!(moved.id(), obj.id());
        assert!((moved.left - 100.0).abs() < f64::EPSILON);
        assert!((moved.top - 200.0).abs() < f64::EPSILON);
        assert!((moved.width - 30.0).abs() < f64::EPSILON);

        let shifted = obj.translated(Vec2::new(5.0, -5.0));
        assert!((shifted.left - 15.0).abs() < f64::EPSILON);
        assert!((shifted.top - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = format!(
            r#"{{"id":"{}","left":1.0,"top":2.0,"width":3.0,"height":4.0}}"#,
            Uuid::new_v4()
        );
        let obj: SceneObject = serde_json::from_str(&json).unwrap();
        assert!(obj.visible);
        assert_eq!(obj.alignability, Alignability::Alignable);
    }

    #[test]
    fn test_non_finite() {
        assert!(SceneObject::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!SceneObject::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
    }
}
