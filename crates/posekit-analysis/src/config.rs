//! Analysis thresholds and scale factors.

use serde::{Deserialize, Serialize};

/// Landmarks must have visibility strictly above this to be measured
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Multiplier applied to normalized distances before reporting
pub const DISTANCE_SCALE: f64 = 100.0;

/// Frames with fewer landmarks than this classify as `Unknown`
pub const MIN_CLASSIFIABLE_LANDMARKS: usize = 25;

/// Configuration shared by the analyzers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub visibility_threshold: f64,
    pub distance_scale: f64,
    pub min_classifiable_landmarks: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: VISIBILITY_THRESHOLD,
            distance_scale: DISTANCE_SCALE,
            min_classifiable_landmarks: MIN_CLASSIFIABLE_LANDMARKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.visibility_threshold, 0.5);
        assert_eq!(config.distance_scale, 100.0);
        assert_eq!(config.min_classifiable_landmarks, 25);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"distance_scale": 1.0}"#).unwrap();
        assert_eq!(config.distance_scale, 1.0);
        assert_eq!(config.visibility_threshold, VISIBILITY_THRESHOLD);
    }
}
