//! Host-supplied tuning for the alignment engine.

use crate::distance::{
    DEFAULT_DISTANCE_RADIUS, DEFAULT_MAX_MEASUREMENTS, DEFAULT_ROW_COLUMN_TOLERANCE,
    DistanceSettings, DistanceWindow,
};
use crate::guides::DEFAULT_THRESHOLD;
use crate::neighbors::DEFAULT_DETECTION_RADIUS;
use crate::snap::SnapMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Alignment engine settings.
///
/// Values are used as given. A negative threshold or an inverted distance
/// window is not rejected; it just never matches anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Alignment and snap tolerance in canvas units.
    pub threshold: f64,
    /// Neighbor radius for guides.
    pub detection_radius: f64,
    /// Neighbor radius for distance measurements.
    pub distance_radius: f64,
    /// Center offset that still counts as the same row or column.
    pub row_column_tolerance: f64,
    /// Gaps reported by distance measurement.
    pub distance_window: DistanceWindow,
    pub max_distance_measurements: usize,
    pub mode: SnapMode,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            detection_radius: DEFAULT_DETECTION_RADIUS,
            distance_radius: DEFAULT_DISTANCE_RADIUS,
            row_column_tolerance: DEFAULT_ROW_COLUMN_TOLERANCE,
            distance_window: DistanceWindow::default(),
            max_distance_measurements: DEFAULT_MAX_MEASUREMENTS,
            mode: SnapMode::default(),
        }
    }
}

impl AlignmentConfig {
    /// Builder-style mode override.
    pub fn with_mode(mut self, mode: SnapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder-style threshold override.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Settings handed to distance measurement.
    pub fn distance_settings(&self) -> DistanceSettings {
        DistanceSettings {
            row_column_tolerance: self.row_column_tolerance,
            radius: self.distance_radius,
            window: self.distance_window,
            max_results: self.max_distance_measurements,
        }
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded alignment config from {}", path.display());
        Ok(config)
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        log::info!("Saved alignment config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AlignmentConfig::default();
        assert!((config.threshold - 5.0).abs() < f64::EPSILON);
        assert!((config.detection_radius - 1000.0).abs() < f64::EPSILON);
        assert!((config.distance_radius - 200.0).abs() < f64::EPSILON);
        assert!((config.row_column_tolerance - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.distance_window, DistanceWindow::new(10.0, 100.0));
        assert_eq!(config.max_distance_measurements, 2);
        assert_eq!(config.mode, SnapMode::All);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AlignmentConfig::from_json(r#"{"threshold": 8.0, "mode": "Guides"}"#).unwrap();
        assert!((config.threshold - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.mode, SnapMode::Guides);
        assert!((config.detection_radius - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_json() {
        let result = AlignmentConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let config = AlignmentConfig::from_json(r#"{"threshold": -3.0}"#).unwrap();
        assert!((config.threshold + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_settings() {
        let config = AlignmentConfig {
            distance_radius: 150.0,
            max_distance_measurements: 4,
            ..AlignmentConfig::default()
        };
        let settings = config.distance_settings();
        assert!((settings.radius - 150.0).abs() < f64::EPSILON);
        assert_eq!(settings.max_results, 4);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alignment.json");

        let config = AlignmentConfig::default()
            .with_threshold(7.5)
            .with_mode(SnapMode::Distances);
        config.save(&path).unwrap();

        let loaded = AlignmentConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AlignmentConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
