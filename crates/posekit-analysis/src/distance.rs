//! Named segment lengths between landmark pairs.

use posekit_core::{distance_3d, LandmarkFrame, LandmarkIndex};
use serde::Serialize;

use crate::config::AnalysisConfig;

/// One catalogue entry: a labeled pair of landmarks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpec {
    pub label: &'static str,
    pub from: LandmarkIndex,
    pub to: LandmarkIndex,
}

const fn segment(from: LandmarkIndex, to: LandmarkIndex, label: &'static str) -> SegmentSpec {
    SegmentSpec { label, from, to }
}

/// Segments measured for every frame, in output order
pub static DISTANCE_CATALOGUE: [SegmentSpec; 11] = {
    use LandmarkIndex::*;
    [
        segment(LeftShoulder, RightShoulder, "Shoulder Width"),
        segment(LeftHip, RightHip, "Hip Width"),
        segment(LeftShoulder, LeftHip, "Left Side Body"),
        segment(RightShoulder, RightHip, "Right Side Body"),
        segment(LeftWrist, RightWrist, "Hands Distance"),
        segment(LeftShoulder, LeftWrist, "Left Arm"),
        segment(RightShoulder, RightWrist, "Right Arm"),
        segment(LeftHip, LeftKnee, "Left Thigh"),
        segment(RightHip, RightKnee, "Right Thigh"),
        segment(LeftKnee, LeftAnkle, "Left Shin"),
        segment(RightKnee, RightAnkle, "Right Shin"),
    ]
};

/// Scaled distance between two landmarks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMeasurement {
    pub label: &'static str,
    /// Normalized Euclidean distance times the configured scale
    pub distance: f64,
    pub point1: usize,
    pub point2: usize,
    pub point1_name: &'static str,
    pub point2_name: &'static str,
}

/// Computes the segment catalogue over a frame
#[derive(Debug, Clone, Copy)]
pub struct DistanceAnalyzer {
    visibility_threshold: f64,
    scale: f64,
}

impl DistanceAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            visibility_threshold: config.visibility_threshold,
            scale: config.distance_scale,
        }
    }

    pub fn catalogue(&self) -> &'static [SegmentSpec] {
        &DISTANCE_CATALOGUE
    }

    pub fn measure(&self, frame: &LandmarkFrame, spec: &SegmentSpec) -> Option<DistanceMeasurement> {
        let [p1, p2] = frame.visible([spec.from, spec.to], self.visibility_threshold)?;

        Some(DistanceMeasurement {
            label: spec.label,
            distance: distance_3d(&p1.position(), &p2.position()) * self.scale,
            point1: spec.from.index(),
            point2: spec.to.index(),
            point1_name: spec.from.name(),
            point2_name: spec.to.name(),
        })
    }

    /// Measure every catalogue entry whose endpoints are both visible
    pub fn compute_all(&self, frame: &LandmarkFrame) -> Vec<DistanceMeasurement> {
        self.catalogue()
            .iter()
            .filter_map(|spec| self.measure(frame, spec))
            .collect()
    }
}

impl Default for DistanceAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
