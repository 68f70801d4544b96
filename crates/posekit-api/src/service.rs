//! Detection service: estimator invocation, analysis and response envelopes.

use std::time::Instant;

use chrono::{DateTime, Utc};
use posekit_analysis::{
    AnalysisPipeline, AnalysisResult, AngleMeasurement, DistanceMeasurement, PoseLabel,
};
use posekit_core::{Landmark, LandmarkIndex};
use serde::{Deserialize, Serialize};

use crate::config::{ApiConfig, ServiceConfig};
use crate::error::ServiceError;
use crate::estimator::PoseEstimator;

/// Incoming detection request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionRequest {
    /// Base64 image, optionally as a `data:` URL
    #[serde(default)]
    pub image: Option<String>,
}

/// Landmarks and everything derived from them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Detection {
    pub landmarks: Vec<Landmark>,
    pub connections: Vec<(usize, usize)>,
    pub distances: Vec<DistanceMeasurement>,
    pub angles: Vec<AngleMeasurement>,
    pub pose_classification: Option<PoseLabel>,
}

impl From<AnalysisResult> for Detection {
    fn from(result: AnalysisResult) -> Self {
        let connections = if result.is_empty() {
            Vec::new()
        } else {
            skeleton_connections()
        };

        Self {
            landmarks: result.landmarks,
            connections,
            distances: result.distances,
            angles: result.angles,
            pose_classification: result.pose_label,
        }
    }
}

/// Response envelope for a detection request
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResponse {
    pub success: bool,

    /// Seconds spent estimating and analyzing, rounded to milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,

    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(flatten)]
    pub detection: Option<Detection>,
}

impl DetectionResponse {
    pub fn success(detection: Detection, processing_time: f64) -> Self {
        Self {
            success: true,
            processing_time: Some((processing_time * 1000.0).round() / 1000.0),
            timestamp: Utc::now(),
            error: None,
            detection: Some(detection),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            processing_time: None,
            timestamp: Utc::now(),
            error: Some(error.into()),
            detection: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatistics {
    pub model: String,
    pub landmark_count: usize,
    pub max_image_size: String,
    pub supported_formats: Vec<String>,
}

/// Skeleton edges as raw index pairs
pub fn skeleton_connections() -> Vec<(usize, usize)> {
    LandmarkIndex::skeleton_pairs()
        .iter()
        .map(|(a, b)| (a.index(), b.index()))
        .collect()
}

/// Drop a `data:<mime>;base64,` prefix, keeping the encoded payload
pub fn strip_data_url(image: &str) -> &str {
    image.split(',').nth(1).unwrap_or(image)
}

/// Ties a pose estimator to the analysis pipeline
pub struct DetectionService<E> {
    estimator: E,
    pipeline: AnalysisPipeline,
    service: ServiceConfig,
}

impl<E: PoseEstimator> DetectionService<E> {
    pub fn new(estimator: E, config: &ApiConfig) -> Self {
        tracing::info!("Detection service initialized with {}", estimator.name());

        Self {
            estimator,
            pipeline: AnalysisPipeline::new(config.analysis),
            service: config.service.clone(),
        }
    }

    /// Handle a raw JSON request body, returning the status code and envelope
    pub async fn handle(&self, body: &[u8]) -> (u16, DetectionResponse) {
        let outcome = match serde_json::from_slice::<DetectionRequest>(body) {
            Ok(request) => self.detect(&request).await,
            Err(e) => Err(ServiceError::from(e)),
        };

        match outcome {
            Ok(response) => (200, response),
            Err(e) => {
                tracing::warn!("Rejected detection request: {}", e);
                (e.status_code(), DetectionResponse::failure(e.to_string()))
            }
        }
    }

    /// Run estimation and analysis for one request.
    ///
    /// A missing image is a request error. Estimator failures are reported
    /// inside the envelope with `success: false`.
    pub async fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse, ServiceError> {
        let image = request
            .image
            .as_deref()
            .filter(|image| !image.is_empty())
            .ok_or(ServiceError::MissingImage)?;

        let start = Instant::now();

        let frame = match self.estimator.estimate(strip_data_url(image)).await {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!("Error processing image: {}", e);
                return Ok(DetectionResponse::failure(e.to_string()));
            }
        };

        let result = self.pipeline.analyze(&frame);
        let processing_time = start.elapsed().as_secs_f64();

        tracing::info!(
            "Pose processed in {:.3}s - {} landmarks found",
            processing_time,
            result.landmarks.len()
        );

        Ok(DetectionResponse::success(result.into(), processing_time))
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy",
            service: self.service.name.clone(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn statistics(&self) -> ServiceStatistics {
        ServiceStatistics {
            model: self.estimator.name().to_string(),
            landmark_count: LandmarkIndex::COUNT,
            max_image_size: self.service.max_image_size.clone(),
            supported_formats: self.service.supported_formats.clone(),
        }
    }
}
