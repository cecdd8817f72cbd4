//! Snap resolution: turning active guides into a corrected position.

use crate::guides::{AlignmentGuide, Orientation};
use crate::scene::SceneObject;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which smart-alignment aids are active while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapMode {
    /// No guides, no snapping, no measurements.
    Off,
    /// Alignment guides and snapping only.
    Guides,
    /// Distance measurements only.
    Distances,
    /// Guides, snapping and distance measurements.
    #[default]
    All,
}

impl SnapMode {
    /// Cycle to the next snap mode.
    pub fn next(self) -> Self {
        match self {
            SnapMode::Off => SnapMode::Guides,
            SnapMode::Guides => SnapMode::Distances,
            SnapMode::Distances => SnapMode::All,
            SnapMode::All => SnapMode::Off,
        }
    }

    /// Check if alignment guides (and snapping to them) are enabled.
    pub fn shows_guides(self) -> bool {
        matches!(self, SnapMode::Guides | SnapMode::All)
    }

    /// Check if distance measurements are enabled.
    pub fn measures_distances(self) -> bool {
        matches!(self, SnapMode::Distances | SnapMode::All)
    }

    /// Check if any aid is enabled.
    pub fn is_enabled(self) -> bool {
        self != SnapMode::Off
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// Corrected top-left position of the moving object.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl SnapResult {
    pub fn x(&self) -> f64 {
        self.point.x
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }

    /// Copy of `obj` placed at the snapped position.
    pub fn apply_to(&self, obj: &SceneObject) -> SceneObject {
        obj.moved_to(self.point)
    }
}

/// Best candidate found so far on one axis.
#[derive(Debug, Clone, Copy)]
struct AxisSnap {
    origin: f64,
    distance: f64,
}

/// Resolve the snapped top-left position for `moving`.
///
/// For every guide, the triggering distance is measured from the edge or
/// center the guide targets. On each axis the closest guide under
/// `threshold` wins; the first one wins on equal distance. An axis without
/// a qualifying guide keeps the object's current coordinate.
///
/// Returns `None` when neither axis snaps.
pub fn find_snap_position(
    moving: &SceneObject,
    guides: &[AlignmentGuide],
    threshold: f64,
) -> Option<SnapResult> {
    let mut best_x: Option<AxisSnap> = None;
    let mut best_y: Option<AxisSnap> = None;

    for guide in guides {
        let alignment = guide.alignment_type;
        let distance = (alignment.coordinate_of(moving) - guide.position).abs();
        // NaN never qualifies
        let qualifies = distance < threshold;
        if !qualifies {
            continue;
        }

        let candidate = AxisSnap {
            origin: alignment.origin_for(moving, guide.position),
            distance,
        };
        let best = match guide.orientation {
            Orientation::Vertical => &mut best_x,
            Orientation::Horizontal => &mut best_y,
        };
        if best.is_none_or(|current| distance < current.distance) {
            *best = Some(candidate);
        }
    }

    if best_x.is_none() && best_y.is_none() {
        return None;
    }

    let result = SnapResult {
        point: Point::new(
            best_x.map_or(moving.left, |snap| snap.origin),
            best_y.map_or(moving.top, |snap| snap.origin),
        ),
        snapped_x: best_x.is_some(),
        snapped_y: best_y.is_some(),
    };
    log::trace!(
        "snap: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
        moving.left,
        moving.top,
        result.point.x,
        result.point.y
    );
    Some(result)
}
