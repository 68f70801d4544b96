//! Rule-based coarse pose classification.
//!
//! The classifier compares image-space heights: smaller `y` is higher in the
//! image. A limb point counts as "raised" when it sits strictly above its
//! reference point and is itself visible. The resulting cues are matched
//! against an ordered rule table and the first matching rule wins.

use std::fmt;

use posekit_core::{LandmarkFrame, LandmarkIndex};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;

/// Coarse body configuration label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseLabel {
    #[serde(rename = "Hands Up")]
    HandsUp,
    #[serde(rename = "Left Hand Up")]
    LeftHandUp,
    #[serde(rename = "Right Hand Up")]
    RightHandUp,
    #[serde(rename = "Squat Position")]
    SquatPosition,
    Standing,
    Unknown,
}

impl PoseLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoseLabel::HandsUp => "Hands Up",
            PoseLabel::LeftHandUp => "Left Hand Up",
            PoseLabel::RightHandUp => "Right Hand Up",
            PoseLabel::SquatPosition => "Squat Position",
            PoseLabel::Standing => "Standing",
            PoseLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PoseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometric cues extracted once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoseCues {
    pub left_hand_up: bool,
    pub right_hand_up: bool,
    pub left_leg_bent: bool,
    pub right_leg_bent: bool,
}

impl PoseCues {
    pub fn from_frame(frame: &LandmarkFrame, visibility_threshold: f64) -> Self {
        use LandmarkIndex::*;
        let raised = |point, reference| is_raised(frame, point, reference, visibility_threshold);

        Self {
            left_hand_up: raised(LeftWrist, LeftShoulder),
            right_hand_up: raised(RightWrist, RightShoulder),
            left_leg_bent: raised(LeftKnee, LeftHip),
            right_leg_bent: raised(RightKnee, RightHip),
        }
    }
}

/// `point` sits strictly above `reference` and is visible; a missing point is never raised
fn is_raised(
    frame: &LandmarkFrame,
    point: LandmarkIndex,
    reference: LandmarkIndex,
    visibility_threshold: f64,
) -> bool {
    match (frame.get(point), frame.get(reference)) {
        (Some(p), Some(r)) => p.y < r.y && p.is_visible(visibility_threshold),
        _ => false,
    }
}

/// A predicate over cues paired with the label it yields
#[derive(Clone, Copy)]
pub struct PoseRule {
    pub label: PoseLabel,
    pub matches: fn(&PoseCues) -> bool,
}

impl fmt::Debug for PoseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoseRule").field("label", &self.label).finish()
    }
}

/// Evaluated top to bottom; `Standing` applies when none match
pub static POSE_RULES: [PoseRule; 4] = [
    PoseRule {
        label: PoseLabel::HandsUp,
        matches: |c| c.left_hand_up && c.right_hand_up,
    },
    PoseRule {
        label: PoseLabel::LeftHandUp,
        matches: |c| c.left_hand_up,
    },
    PoseRule {
        label: PoseLabel::RightHandUp,
        matches: |c| c.right_hand_up,
    },
    PoseRule {
        label: PoseLabel::SquatPosition,
        matches: |c| c.left_leg_bent && c.right_leg_bent,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct PoseClassifier {
    visibility_threshold: f64,
    min_landmarks: usize,
    rules: &'static [PoseRule],
    fallback: PoseLabel,
}

impl PoseClassifier {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            visibility_threshold: config.visibility_threshold,
            min_landmarks: config.min_classifiable_landmarks,
            rules: &POSE_RULES,
            fallback: PoseLabel::Standing,
        }
    }

    pub fn rules(&self) -> &'static [PoseRule] {
        self.rules
    }

    pub fn classify(&self, frame: &LandmarkFrame) -> PoseLabel {
        if frame.len() < self.min_landmarks {
            return PoseLabel::Unknown;
        }

        let cues = PoseCues::from_frame(frame, self.visibility_threshold);
        self.rules()
            .iter()
            .find(|rule| (rule.matches)(&cues))
            .map_or(self.fallback, |rule| rule.label)
    }
}

impl Default for PoseClassifier {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posekit_core::Landmark;

    /// Upright figure: wrists below shoulders, knees below hips
    fn standing_landmarks() -> Vec<Landmark> {
        let mut landmarks: Vec<Landmark> = (0..LandmarkIndex::COUNT)
            .map(|i| Landmark::new(i, 0.5, 0.5, 0.0, 0.9))
            .collect();
        let mut set_y = |idx: LandmarkIndex, y: f64| landmarks[idx as usize].y = y;
        set_y(LandmarkIndex::LeftShoulder, 0.3);
        set_y(LandmarkIndex::RightShoulder, 0.3);
        set_y(LandmarkIndex::LeftWrist, 0.55);
        set_y(LandmarkIndex::RightWrist, 0.55);
        set_y(LandmarkIndex::LeftHip, 0.6);
        set_y(LandmarkIndex::RightHip, 0.6);
        set_y(LandmarkIndex::LeftKnee, 0.75);
        set_y(LandmarkIndex::RightKnee, 0.75);
        landmarks
    }

    fn classify(landmarks: Vec<Landmark>) -> PoseLabel {
        PoseClassifier::default().classify(&LandmarkFrame::new(landmarks).unwrap())
    }

    #[test]
    fn test_standing() {
        assert_eq!(classify(standing_landmarks()), PoseLabel::Standing);
    }

    #[test]
    fn test_hands_up() {
        let mut lm = standing_landmarks();
        lm[15].y = 0.1;
        lm[16].y = 0.1;
        assert_eq!(classify(lm), PoseLabel::HandsUp);
    }

    #[test]
    fn test_single_hand_up() {
        let mut lm = standing_landmarks();
        lm[16].y = 0.1;
        assert_eq!(classify(lm), PoseLabel::RightHandUp);

        let mut lm = standing_landmarks();
        lm[15].y = 0.1;
        assert_eq!(classify(lm), PoseLabel::LeftHandUp);
    }

    #[test]
    fn test_hidden_wrist_is_not_up() {
        let mut lm = standing_landmarks();
        lm[15].y = 0.1;
        lm[16].y = 0.1;
        lm[16].visibility = 0.5;
        assert_eq!(classify(lm), PoseLabel::LeftHandUp);
    }

    #[test]
    fn test_equal_height_is_not_up() {
        let mut lm = standing_landmarks();
        lm[15].y = lm[11].y;
        assert_eq!(classify(lm), PoseLabel::Standing);
    }

    #[test]
    fn test_squat() {
        let mut lm = standing_landmarks();
        lm[25].y = 0.55;
        lm[26].y = 0.55;
        assert_eq!(classify(lm), PoseLabel::SquatPosition);
    }

    #[test]
    fn test_hands_take_priority_over_squat() {
        let mut lm = standing_landmarks();
        lm[25].y = 0.55;
        lm[26].y = 0.55;
        lm[15].y = 0.1;
        assert_eq!(classify(lm), PoseLabel::LeftHandUp);
    }

    #[test]
    fn test_one_bent_leg_is_standing() {
        let mut lm = standing_landmarks();
        lm[25].y = 0.55;
        assert_eq!(classify(lm), PoseLabel::Standing);
    }

    #[test]
    fn test_too_few_landmarks() {
        let mut lm = standing_landmarks();
        lm.truncate(24);
        assert_eq!(classify(lm), PoseLabel::Unknown);
        assert_eq!(classify(Vec::new()), PoseLabel::Unknown);
    }

    #[test]
    fn test_minimum_landmark_count_classifies() {
        let mut lm = standing_landmarks();
        lm.truncate(25);
        // Knees 25 and 26 are absent, so neither leg reads as bent.
        assert_eq!(classify(lm.clone()), PoseLabel::Standing);

        lm[15].y = 0.1;
        assert_eq!(classify(lm), PoseLabel::LeftHandUp);
    }

    #[test]
    fn test_short_frame_left_hand_up() {
        let mut lm = standing_landmarks();
        lm.truncate(26);
        lm[15].y = 0.1;
        lm[11].y = 0.5;
        lm[15].visibility = 1.0;
        lm[11].visibility = 1.0;
        assert_eq!(classify(lm), PoseLabel::LeftHandUp);
    }

    #[test]
    fn test_deterministic() {
        let frame = LandmarkFrame::new(standing_landmarks()).unwrap();
        let classifier = PoseClassifier::default();
        let first = classifier.classify(&frame);
        for _ in 0..10 {
            assert_eq!(classifier.classify(&frame), first);
        }
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(PoseLabel::SquatPosition.to_string(), "Squat Position");
        assert_eq!(serde_json::to_string(&PoseLabel::HandsUp).unwrap(), "\"Hands Up\"");
        let parsed: PoseLabel = serde_json::from_str("\"Right Hand Up\"").unwrap();
        assert_eq!(parsed, PoseLabel::RightHandUp);
    }

    #[test]
    fn test_rule_order() {
        let classifier = PoseClassifier::default();
        assert_eq!(classifier.rules().len(), POSE_RULES.len());
        let labels: Vec<_> = classifier.rules().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                PoseLabel::HandsUp,
                PoseLabel::LeftHandUp,
                PoseLabel::RightHandUp,
                PoseLabel::SquatPosition,
            ]
        );
    }
}
