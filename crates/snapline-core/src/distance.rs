//! Gap measurement between the moving object and its row/column neighbors.

use crate::neighbors::find_nearby_objects;
use crate::scene::SceneObject;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default radius for distance neighbors.
pub const DEFAULT_DISTANCE_RADIUS: f64 = 200.0;
/// Default center offset that still counts as the same row or column.
pub const DEFAULT_ROW_COLUMN_TOLERANCE: f64 = 20.0;
/// Default number of measurements kept.
pub const DEFAULT_MAX_MEASUREMENTS: usize = 2;

/// Axis along which a gap is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Range of gaps worth annotating, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceWindow {
    pub min: f64,
    pub max: f64,
}

impl Default for DistanceWindow {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 100.0,
        }
    }
}

impl DistanceWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, gap: f64) -> bool {
        gap >= self.min && gap <= self.max
    }
}

/// Parameters for [`measure_distances`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSettings {
    pub row_column_tolerance: f64,
    pub radius: f64,
    pub window: DistanceWindow,
    pub max_results: usize,
}

impl Default for DistanceSettings {
    fn default() -> Self {
        Self {
            row_column_tolerance: DEFAULT_ROW_COLUMN_TOLERANCE,
            radius: DEFAULT_DISTANCE_RADIUS,
            window: DistanceWindow::default(),
            max_results: DEFAULT_MAX_MEASUREMENTS,
        }
    }
}

/// A measured gap, with the endpoints of its dimension line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMeasurement {
    /// The moving object.
    pub from: SceneObject,
    /// The neighbor the gap is measured to.
    pub to: SceneObject,
    pub distance: f64,
    pub direction: Direction,
    /// Point on the moving object's facing edge.
    pub from_point: Point,
    /// Point on the neighbor's facing edge.
    pub to_point: Point,
}

impl DistanceMeasurement {
    /// Midpoint of the dimension line, where the label goes.
    pub fn midpoint(&self) -> Point {
        self.from_point.midpoint(self.to_point)
    }
}

/// Gap between facing edges of two objects in the same row. Negative when they overlap.
fn horizontal_gap(moving: &SceneObject, neighbor: &SceneObject) -> DistanceMeasurement {
    let y = moving.center_y();
    let (distance, from_x, to_x) = if neighbor.center_x() >= moving.center_x() {
        (neighbor.left - moving.right(), moving.right(), neighbor.left)
    } else {
        (moving.left - neighbor.right(), moving.left, neighbor.right())
    };

    DistanceMeasurement {
        from: *moving,
        to: *neighbor,
        distance,
        direction: Direction::Horizontal,
        from_point: Point::new(from_x, y),
        to_point: Point::new(to_x, y),
    }
}

fn vertical_gap(moving: &SceneObject, neighbor: &SceneObject) -> DistanceMeasurement {
    let x = moving.center_x();
    let (distance, from_y, to_y) = if neighbor.center_y() >= moving.center_y() {
        (neighbor.top - moving.bottom(), moving.bottom(), neighbor.top)
    } else {
        (moving.top - neighbor.bottom(), moving.top, neighbor.bottom())
    };

    DistanceMeasurement {
        from: *moving,
        to: *neighbor,
        distance,
        direction: Direction::Vertical,
        from_point: Point::new(x, from_y),
        to_point: Point::new(x, to_y),
    }
}

/// Measure gaps between `moving` and neighbors sharing its row or column.
///
/// A neighbor is in the same row when its center-y is strictly within
/// `row_column_tolerance` of the moving object's, and likewise for columns
/// on the x axis. Only positive gaps inside the window are kept, smallest
/// first, capped at `max_results`.
pub fn measure_distances(
    moving: &SceneObject,
    objects: &[SceneObject],
    settings: &DistanceSettings,
) -> Vec<DistanceMeasurement> {
    let neighbors = find_nearby_objects(moving, objects, settings.radius);
    let tolerance = settings.row_column_tolerance;

    let mut measurements: Vec<DistanceMeasurement> = Vec::new();
    for neighbor in &neighbors {
        if (neighbor.center_y() - moving.center_y()).abs() < tolerance {
            measurements.push(horizontal_gap(moving, neighbor));
        }
        if (neighbor.center_x() - moving.center_x()).abs() < tolerance {
            measurements.push(vertical_gap(moving, neighbor));
        }
    }
    // Touching or overlapping boxes have no gap, whatever the window says
    measurements.retain(|m| m.distance > 0.0 && settings.window.contains(m.distance));

    // Stable: equal gaps keep neighbor order
    measurements.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    measurements.truncate(settings.max_results);

    log::trace!(
        "distance: {} measurements from {} neighbors",
        measurements.len(),
        neighbors.len()
    );
    measurements
}
