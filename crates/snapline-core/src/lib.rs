//! Snapline Core Library
//!
//! Smart alignment for canvas editors: while a shape is dragged, find the
//! neighbors it lines up with, pick the guides worth showing, compute the
//! snapped position and measure gaps to its row and column neighbors.
//!
//! Every function is pure. The host passes a snapshot of the scene on each
//! pointer move and applies the returned [`SnapResult`] itself.

pub mod config;
pub mod distance;
pub mod engine;
pub mod guides;
pub mod neighbors;
pub mod scene;
pub mod snap;

pub use config::{AlignmentConfig, ConfigError, ConfigResult};
pub use distance::{
    Direction, DistanceMeasurement, DistanceSettings, DistanceWindow, measure_distances,
};
pub use engine::{AlignmentEngine, DragFeedback};
pub use guides::{
    AlignmentGuide, AlignmentType, Orientation, calculate_alignment_guides, prioritize_guides,
};
pub use neighbors::find_nearby_objects;
pub use scene::{Alignability, ObjectId, SceneObject};
pub use snap::{SnapMode, SnapResult, find_snap_position};
