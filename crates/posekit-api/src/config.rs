//! Service configuration.

use std::path::Path;

use posekit_analysis::AnalysisConfig;
use serde::{Deserialize, Serialize};

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service metadata reported by health and statistics
    pub service: ServiceConfig,

    /// Analyzer thresholds
    pub analysis: AnalysisConfig,

    /// Log filter defaults
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Human-readable service name
    pub name: String,

    /// Largest accepted image, as "WIDTHxHEIGHT"
    pub max_image_size: String,

    /// Image formats the estimator accepts
    pub supported_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "Body Pose Detection API".to_string(),
            max_image_size: "1920x1080".to_string(),
            supported_formats: vec!["JPEG".to_string(), "PNG".to_string(), "BMP".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from file, with environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder().add_source(env_source()).build()?;

        settings.try_deserialize()
    }
}

/// `POSEKIT_<SECTION>__<KEY>`, e.g. `POSEKIT_LOGGING__LEVEL=debug`
fn env_source() -> config::Environment {
    config::Environment::with_prefix("POSEKIT")
        .prefix_separator("_")
        .separator("__")
}
