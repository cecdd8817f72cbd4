//! Neighbor discovery for the object being dragged.

use crate::scene::{ObjectId, SceneObject};
use std::collections::HashSet;

/// Default radius for alignment neighbors (effectively the whole visible canvas).
pub const DEFAULT_DETECTION_RADIUS: f64 = 1000.0;

/// Collect the objects the moving object may align against.
///
/// Skips the moving object itself (by ID), hidden objects, guide artifacts,
/// non-alignable objects and objects with non-finite geometry. Keeps objects
/// whose bounding-box center lies within `radius` of the moving object's
/// center. Each ID appears at most once; order is not meaningful.
pub fn find_nearby_objects(
    moving: &SceneObject,
    objects: &[SceneObject],
    radius: f64,
) -> Vec<SceneObject> {
    if !moving.is_finite() {
        log::trace!("neighbors: moving object {} has non-finite geometry", moving.id());
        return Vec::new();
    }

    let center = moving.center();
    let mut seen: HashSet<ObjectId> = HashSet::new();
    let mut nearby = Vec::new();

    for obj in objects {
        if obj.id() == moving.id() || !obj.participates() {
            continue;
        }
        if !obj.is_finite() {
            log::trace!("neighbors: skipping {} with non-finite geometry", obj.id());
            continue;
        }
        if obj.center().distance(center) <= radius && seen.insert(obj.id()) {
            nearby.push(*obj);
        }
    }
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Alignability;

    #[test]
    fn test_excludes_self() {
        let moving = SceneObject::new(0.0, 0.0, 10.0, 10.0);
        let other = SceneObject::new(20.0, 0.0, 10.0, 10.0);
        let nearby = find_nearby_objects(&moving, &[moving, other], DEFAULT_DETECTION_RADIUS);
        assert_eq!(nearby, vec![other]);
    }

    #[test]
    fn test_empty_scene() {
        let moving = SceneObject::new(0.0, 0.0, 10.0, 10.0);
        assert!(find_nearby_objects(&moving, &[], DEFAULT_DETECTION_RADIUS).is_empty());
        assert!(find_nearby_objects(&moving, &[moving], DEFAULT_DETECTION_RADIUS).is_empty());
    }

    #[test]
    fn test_excludes_hidden_and_tagged() {
        let moving = SceneObject::new(0.0, 0.0, 10.0, 10.0);
        let hidden = SceneObject::new(0.0, 0.0, 10.0, 10.0).with_visible(false);
        let guide =
            SceneObject::new(0.0, 0.0, 10.0, 10.0).with_alignability(Alignability::GuideArtifact);
        let connector =
            SceneObject::new(0.0, 0.0, 10.0, 10.0).with_alignability(Alignability::NonAlignable);
        let shape = SceneObject::new(0.0, 30.0, 10.0, 10.0);

        let nearby = find_nearby_objects(
            &moving,
            &[hidden, guide, connector, shape],
            DEFAULT_DETECTION_RADIUS,
        );
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].id(), shape.id());
    }

    #[test]
    fn test_radius_uses_center_distance() {
        let moving = SceneObject::new(0.0, 0.0, 10.0, 10.0);
        // Centers 300 and 301 units away
        let at_edge = SceneObject::new(300.0, 0.0, 10.0, 10.0);
        let beyond = SceneObject::new(0.0, 301.0, 10.0, 10.0);

        let nearby = find_nearby_objects(&moving, &[at_edge, beyond], 300.0);
        assert_eq!(nearby, vec![at_edge]);
    }

    #[test]
    fn test_nan_geometry_is_skipped() {
        let moving = SceneObject::new(0.0, 0.0, 10.0, 10.0);
        let broken = SceneObject::new(f64::NAN, 0.0, 10.0, 10.0);
        assert!(find_nearby_objects(&moving, &[broken], DEFAULT_DETECTION_RADIUS).is_empty());

        let infinite = SceneObject::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert!(find_nearby_objects(&moving, &[infinite], f64::INFINITY).is_empty());
    }

    #[test]
    fn test_non_finite_moving_object() {
        let moving = SceneObject::new(0.0, f64::NAN, 10.0, 10.0);
        let other = SceneObject::new(20.0, 0.0, 10.0, 10.0);
        assert!(find_nearby_objects(&moving, &[other], f64::INFINITY).is_empty());
    }

    #[test]
    fn test_duplicate_ids_collapsed() {
        let moving = SceneObject::new(0.0, 0.0, 10.0, 10.0);
        let other = SceneObject::new(30.0, 0.0, 10.0, 10.0);
        let nearby = find_nearby_objects(&moving, &[other, other], DEFAULT_DETECTION_RADIUS);
        assert_eq!(nearby, vec![other]);
    }
}
