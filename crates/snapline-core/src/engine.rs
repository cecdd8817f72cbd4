//! Per-pointer-move alignment pipeline.

use crate::config::AlignmentConfig;
use crate::distance::{DistanceMeasurement, measure_distances};
use crate::guides::{AlignmentGuide, calculate_alignment_guides, prioritize_guides};
use crate::neighbors::find_nearby_objects;
use crate::scene::SceneObject;
use crate::snap::{SnapResult, find_snap_position};
use kurbo::Size;

/// Everything the host needs after one drag step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragFeedback {
    /// At most one vertical and one horizontal guide.
    pub guides: Vec<AlignmentGuide>,
    /// Position to apply to the moving object, if any guide snapped.
    pub snap: Option<SnapResult>,
    /// At most `max_distance_measurements` gap annotations.
    pub distances: Vec<DistanceMeasurement>,
}

impl DragFeedback {
    /// Nothing to draw and nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty() && self.snap.is_none() && self.distances.is_empty()
    }
}

/// Runs neighbor discovery, guides, snapping and measurements for a drag.
///
/// The engine holds only configuration; every call is independent of the
/// previous one.
#[derive(Debug, Clone, Default)]
pub struct AlignmentEngine {
    config: AlignmentConfig,
}

impl AlignmentEngine {
    pub fn new(config: AlignmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AlignmentConfig {
        &mut self.config
    }

    /// Prioritized guides for `moving` at its current position.
    pub fn guides_for(
        &self,
        moving: &SceneObject,
        objects: &[SceneObject],
        canvas: Size,
    ) -> Vec<AlignmentGuide> {
        let neighbors = find_nearby_objects(moving, objects, self.config.detection_radius);
        let raw = calculate_alignment_guides(moving, &neighbors, canvas, self.config.threshold);
        prioritize_guides(&raw)
    }

    /// Evaluate one pointer-move step.
    ///
    /// Distances are measured against the snapped position, since that is
    /// where the host will place the object.
    pub fn evaluate(
        &self,
        moving: &SceneObject,
        objects: &[SceneObject],
        canvas: Size,
    ) -> DragFeedback {
        let mode = self.config.mode;
        if !mode.is_enabled() {
            return DragFeedback::default();
        }

        let (guides, snap) = if mode.shows_guides() {
            let guides = self.guides_for(moving, objects, canvas);
            let snap = find_snap_position(moving, &guides, self.config.threshold);
            (guides, snap)
        } else {
            (Vec::new(), None)
        };

        let distances = if mode.measures_distances() {
            let placed = snap.map_or(*moving, |snap| snap.apply_to(moving));
            measure_distances(&placed, objects, &self.config.distance_settings())
        } else {
            Vec::new()
        };

        log::trace!(
            "drag step: {} guides, snapped={}, {} distances",
            guides.len(),
            snap.is_some(),
            distances.len()
        );
        DragFeedback {
            guides,
            snap,
            distances,
        }
    }
}
