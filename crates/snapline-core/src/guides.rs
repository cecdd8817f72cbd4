//! Alignment guide generation and prioritization.
//!
//! Guides are rebuilt from scratch on every pointer move. Nothing here keeps
//! state between calls.

use crate::scene::SceneObject;
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Default alignment tolerance in canvas units.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Direction of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// A vertical line; its position is an x-coordinate.
    Vertical,
    /// A horizontal line; its position is a y-coordinate.
    Horizontal,
}

/// Which edge or center of the moving object a guide targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentType {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl AlignmentType {
    /// Axis the alignment acts on.
    pub fn orientation(self) -> Orientation {
        match self {
            AlignmentType::Left | AlignmentType::Center | AlignmentType::Right => {
                Orientation::Vertical
            }
            AlignmentType::Top | AlignmentType::Middle | AlignmentType::Bottom => {
                Orientation::Horizontal
            }
        }
    }

    /// Rank used when several guides compete on one axis (lower wins).
    ///
    /// Centers outrank edges: `[center/middle, left, right, top, bottom]`.
    pub fn priority(self) -> u8 {
        match self {
            AlignmentType::Center | AlignmentType::Middle => 0,
            AlignmentType::Left => 1,
            AlignmentType::Right => 2,
            AlignmentType::Top => 3,
            AlignmentType::Bottom => 4,
        }
    }

    /// The coordinate of `obj` this alignment targets.
    pub fn coordinate_of(self, obj: &SceneObject) -> f64 {
        match self {
            AlignmentType::Left => obj.left,
            AlignmentType::Center => obj.center_x(),
            AlignmentType::Right => obj.right(),
            AlignmentType::Top => obj.top,
            AlignmentType::Middle => obj.center_y(),
            AlignmentType::Bottom => obj.bottom(),
        }
    }

    /// Top-left coordinate on this axis that puts the targeted edge of `obj`
    /// exactly on `position`.
    pub fn origin_for(self, obj: &SceneObject, position: f64) -> f64 {
        match self {
            AlignmentType::Left | AlignmentType::Top => position,
            AlignmentType::Center => position - obj.width / 2.0,
            AlignmentType::Middle => position - obj.height / 2.0,
            AlignmentType::Right => position - obj.width,
            AlignmentType::Bottom => position - obj.height,
        }
    }
}

/// A candidate or active alignment guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentGuide {
    pub orientation: Orientation,
    /// x for vertical guides, y for horizontal ones.
    pub position: f64,
    pub alignment_type: AlignmentType,
    /// Neighbors that produced this guide (empty for canvas-center guides).
    pub contributing_objects: Vec<SceneObject>,
}

impl AlignmentGuide {
    /// Create a guide produced by one neighbor.
    pub fn new(alignment_type: AlignmentType, position: f64, contributor: SceneObject) -> Self {
        Self {
            orientation: alignment_type.orientation(),
            position,
            alignment_type,
            contributing_objects: vec![contributor],
        }
    }

    /// Create a guide along the canvas center line.
    pub fn canvas_center(alignment_type: AlignmentType, position: f64) -> Self {
        Self {
            orientation: alignment_type.orientation(),
            position,
            alignment_type,
            contributing_objects: Vec::new(),
        }
    }

    /// Whether this guide comes from the canvas frame rather than a neighbor.
    pub fn is_canvas_guide(&self) -> bool {
        self.contributing_objects.is_empty()
    }
}

fn within(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() < threshold
}

/// Compute every raw alignment guide for `moving` against `neighbors`.
///
/// Each comparison is strict: a difference of exactly `threshold` does not
/// qualify. Guide positions are taken from the neighbor (or the canvas
/// center); the alignment type names the moving object's edge.
pub fn calculate_alignment_guides(
    moving: &SceneObject,
    neighbors: &[SceneObject],
    canvas: Size,
    threshold: f64,
) -> Vec<AlignmentGuide> {
    let mut guides = Vec::new();

    let canvas_center_x = canvas.width / 2.0;
    let canvas_center_y = canvas.height / 2.0;
    if within(moving.center_x(), canvas_center_x, threshold) {
        guides.push(AlignmentGuide::canvas_center(AlignmentType::Center, canvas_center_x));
    }
    if within(moving.center_y(), canvas_center_y, threshold) {
        guides.push(AlignmentGuide::canvas_center(AlignmentType::Middle, canvas_center_y));
    }

    for neighbor in neighbors {
        // (moving coordinate, neighbor coordinate, targeted moving edge)
        let comparisons = [
            (moving.left, neighbor.left, AlignmentType::Left),
            (moving.right(), neighbor.right(), AlignmentType::Right),
            (moving.center_x(), neighbor.center_x(), AlignmentType::Center),
            (moving.left, neighbor.right(), AlignmentType::Left),
            (moving.right(), neighbor.left, AlignmentType::Right),
            (moving.top, neighbor.top, AlignmentType::Top),
            (moving.bottom(), neighbor.bottom(), AlignmentType::Bottom),
            (moving.center_y(), neighbor.center_y(), AlignmentType::Middle),
            (moving.top, neighbor.bottom(), AlignmentType::Top),
            (moving.bottom(), neighbor.top, AlignmentType::Bottom),
        ];

        for (own, theirs, alignment_type) in comparisons {
            if within(own, theirs, threshold) {
                guides.push(AlignmentGuide::new(alignment_type, theirs, *neighbor));
            }
        }
    }

    log::trace!(
        "alignment: {} raw guides from {} neighbors",
        guides.len(),
        neighbors.len()
    );
    guides
}

/// Reduce raw guides to at most one vertical and one horizontal guide.
///
/// Within an axis the lowest [`AlignmentType::priority`] wins; ties keep the
/// earliest guide in input order. The vertical guide, if any, comes first.
pub fn prioritize_guides(guides: &[AlignmentGuide]) -> Vec<AlignmentGuide> {
    let best = |orientation: Orientation| {
        guides
            .iter()
            .filter(|guide| guide.orientation == orientation)
            // First minimum wins on ties
            .min_by_key(|guide| guide.alignment_type.priority())
            .cloned()
    };

    [best(Orientation::Vertical), best(Orientation::Horizontal)]
        .into_iter()
        .flatten()
        .collect()
}
