//! Joint angles at catalogued landmark triples.

use posekit_core::{angle_between, LandmarkFrame, LandmarkIndex};
use serde::Serialize;

use crate::config::AnalysisConfig;

/// One catalogue entry: the vertex `joint` and the two points it connects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSpec {
    pub label: &'static str,
    pub first: LandmarkIndex,
    pub joint: LandmarkIndex,
    pub last: LandmarkIndex,
}

const fn joint(
    first: LandmarkIndex,
    joint: LandmarkIndex,
    last: LandmarkIndex,
    label: &'static str,
) -> JointSpec {
    JointSpec {
        label,
        first,
        joint,
        last,
    }
}

/// Joints measured for every frame, in output order
pub static ANGLE_CATALOGUE: [JointSpec; 6] = {
    use LandmarkIndex::*;
    [
        joint(LeftShoulder, LeftElbow, LeftWrist, "Left Elbow Angle"),
        joint(RightShoulder, RightElbow, RightWrist, "Right Elbow Angle"),
        joint(LeftElbow, LeftShoulder, LeftHip, "Left Shoulder Angle"),
        joint(RightElbow, RightShoulder, RightHip, "Right Shoulder Angle"),
        joint(LeftHip, LeftKnee, LeftAnkle, "Left Knee Angle"),
        joint(RightHip, RightKnee, RightAnkle, "Right Knee Angle"),
    ]
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleMeasurement {
    pub label: &'static str,
    /// Degrees in [0, 180], or NaN (`null` in JSON) when a ray has zero length
    pub angle: f64,
    pub joint_point: usize,
    pub joint_name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AngleAnalyzer {
    visibility_threshold: f64,
}

impl AngleAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            visibility_threshold: config.visibility_threshold,
        }
    }

    pub fn catalogue(&self) -> &'static [JointSpec] {
        &ANGLE_CATALOGUE
    }

    pub fn measure(&self, frame: &LandmarkFrame, spec: &JointSpec) -> Option<AngleMeasurement> {
        let [a, b, c] = frame.visible([spec.first, spec.joint, spec.last], self.visibility_threshold)?;

        Some(AngleMeasurement {
            label: spec.label,
            angle: angle_between(&a.position(), &b.position(), &c.position()),
            joint_point: spec.joint.index(),
            joint_name: spec.joint.name(),
        })
    }

    pub fn compute_all(&self, frame: &LandmarkFrame) -> Vec<AngleMeasurement> {
        self.catalogue()
            .iter()
            .filter_map(|spec| self.measure(frame, spec))
            .collect()
    }
}

impl Default for AngleAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
