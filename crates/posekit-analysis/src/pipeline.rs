//! Complete analysis pipeline over one landmark frame.

use posekit_core::{Landmark, LandmarkFrame};
use serde::Serialize;

use crate::angle::{AngleAnalyzer, AngleMeasurement};
use crate::classifier::{PoseClassifier, PoseLabel};
use crate::config::AnalysisConfig;
use crate::distance::{DistanceAnalyzer, DistanceMeasurement};

/// Everything derived from one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub landmarks: Vec<Landmark>,
    pub distances: Vec<DistanceMeasurement>,
    pub angles: Vec<AngleMeasurement>,
    /// `None` when no body was detected
    pub pose_label: Option<PoseLabel>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// Runs the distance, angle and classification stages
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPipeline {
    distances: DistanceAnalyzer,
    angles: AngleAnalyzer,
    classifier: PoseClassifier,
}

impl AnalysisPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            distances: DistanceAnalyzer::new(&config),
            angles: AngleAnalyzer::new(&config),
            classifier: PoseClassifier::new(&config),
        }
    }

    /// Analyze a frame. An empty frame is the "no person detected" outcome
    /// and yields an empty result rather than an error.
    pub fn analyze(&self, frame: &LandmarkFrame) -> AnalysisResult {
        if frame.is_empty() {
            tracing::debug!("Empty landmark frame, skipping analysis");
            return AnalysisResult::default();
        }

        let distances = self.distances.compute_all(frame);
        let angles = self.angles.compute_all(frame);
        let pose_label = self.classifier.classify(frame);

        tracing::debug!(
            landmarks = frame.len(),
            distances = distances.len(),
            angles = angles.len(),
            pose = %pose_label,
            "Frame analyzed"
        );

        AnalysisResult {
            landmarks: frame.landmarks().to_vec(),
            distances,
            angles,
            pose_label: Some(pose_label),
        }
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
