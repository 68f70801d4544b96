//! Landmark data model for the 33-point body topology.

use std::borrow::Cow;

use nalgebra::Point3;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Display names indexed by landmark position.
static LANDMARK_NAMES: [&str; LandmarkIndex::COUNT] = [
    "Nose",
    "Left Eye Inner",
    "Left Eye",
    "Left Eye Outer",
    "Right Eye Inner",
    "Right Eye",
    "Right Eye Outer",
    "Left Ear",
    "Right Ear",
    "Mouth Left",
    "Mouth Right",
    "Left Shoulder",
    "Right Shoulder",
    "Left Elbow",
    "Right Elbow",
    "Left Wrist",
    "Right Wrist",
    "Left Pinky",
    "Right Pinky",
    "Left Index",
    "Right Index",
    "Left Thumb",
    "Right Thumb",
    "Left Hip",
    "Right Hip",
    "Left Knee",
    "Right Knee",
    "Left Ankle",
    "Right Ankle",
    "Left Heel",
    "Right Heel",
    "Left Foot Index",
    "Right Foot Index",
];

/// 33-point body landmark definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const COUNT: usize = 33;

    pub const ALL: [LandmarkIndex; LandmarkIndex::COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        LANDMARK_NAMES[self as usize]
    }

    /// Returns skeleton connectivity pairs for visualization
    pub fn skeleton_pairs() -> &'static [(LandmarkIndex, LandmarkIndex)] {
        use LandmarkIndex::*;
        &[
            (Nose, LeftEyeInner),
            (LeftEyeInner, LeftEye),
            (LeftEye, LeftEyeOuter),
            (LeftEyeOuter, LeftEar),
            (Nose, RightEyeInner),
            (RightEyeInner, RightEye),
            (RightEye, RightEyeOuter),
            (RightEyeOuter, RightEar),
            (MouthLeft, MouthRight),
            (LeftShoulder, RightShoulder),
            (LeftShoulder, LeftElbow),
            (LeftElbow, LeftWrist),
            (LeftWrist, LeftPinky),
            (LeftWrist, LeftIndex),
            (LeftWrist, LeftThumb),
            (LeftPinky, LeftIndex),
            (RightShoulder, RightElbow),
            (RightElbow, RightWrist),
            (RightWrist, RightPinky),
            (RightWrist, RightIndex),
            (RightWrist, RightThumb),
            (RightPinky, RightIndex),
            (LeftShoulder, LeftHip),
            (RightShoulder, RightHip),
            (LeftHip, RightHip),
            (LeftHip, LeftKnee),
            (RightHip, RightKnee),
            (LeftKnee, LeftAnkle),
            (RightKnee, RightAnkle),
            (LeftAnkle, LeftHeel),
            (RightAnkle, RightHeel),
            (LeftHeel, LeftFootIndex),
            (RightHeel, RightFootIndex),
            (LeftAnkle, LeftFootIndex),
            (RightAnkle, RightFootIndex),
        ]
    }
}

/// Name for a raw landmark index, `Point_<n>` outside the 33-point table.
pub fn landmark_name(index: usize) -> Cow<'static, str> {
    match LandmarkIndex::from_index(index) {
        Some(landmark) => Cow::Borrowed(landmark.name()),
        None => Cow::Owned(format!("Point_{}", index)),
    }
}

/// One tracked body point in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Landmark {
    pub index: usize,
    /// Horizontal position, 0.0 at the left image edge
    pub x: f64,
    /// Vertical position, 0.0 at the top image edge
    pub y: f64,
    /// Depth relative to the hips; smaller is closer to the camera
    pub z: f64,
    /// Detection confidence, 0.0 to 1.0
    pub visibility: f64,
}

impl Landmark {
    pub fn new(index: usize, x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self {
            index,
            x,
            y,
            z,
            visibility,
        }
    }

    pub fn name(&self) -> Cow<'static, str> {
        landmark_name(self.index)
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Strictly above the threshold counts as visible
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.visibility > threshold
    }
}

impl Serialize for Landmark {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Landmark", 6)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.serialize_field("z", &self.z)?;
        state.serialize_field("visibility", &self.visibility)?;
        state.serialize_field("name", &self.name())?;
        state.end()
    }
}

/// Wire shapes accepted for a frame: a bare array or `{"landmarks": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FrameRepr {
    Bare(Vec<Landmark>),
    Wrapped { landmarks: Vec<Landmark> },
}

/// All landmarks detected for one image, in anatomical index order.
///
/// A frame holds between 0 and 33 landmarks and the landmark at position
/// `i` always carries index `i`. An empty frame means no body was detected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.len() > LandmarkIndex::COUNT {
            return Err(Error::TooManyLandmarks {
                count: landmarks.len(),
            });
        }

        if let Some((position, landmark)) = landmarks
            .iter()
            .enumerate()
            .find(|(position, landmark)| landmark.index != *position)
        {
            return Err(Error::IndexMismatch {
                position,
                index: landmark.index,
            });
        }

        Ok(Self { landmarks })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a frame from `(x, y, z, visibility)` tuples, numbering them in order
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64, f64, f64)>,
    {
        let landmarks = points
            .into_iter()
            .enumerate()
            .map(|(index, (x, y, z, visibility))| Landmark::new(index, x, y, z, visibility))
            .collect();
        Self::new(landmarks)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn into_landmarks(self) -> Vec<Landmark> {
        self.landmarks
    }

    pub fn get(&self, index: LandmarkIndex) -> Option<&Landmark> {
        self.landmarks.get(index as usize)
    }

    /// True when every index is present and strictly above `threshold`
    pub fn all_visible(&self, indices: &[LandmarkIndex], threshold: f64) -> bool {
        indices
            .iter()
            .all(|&idx| self.get(idx).is_some_and(|lm| lm.is_visible(threshold)))
    }

    /// Resolve a group of landmarks only if all of them pass the visibility gate
    pub fn visible<const N: usize>(
        &self,
        indices: [LandmarkIndex; N],
        threshold: f64,
    ) -> Option<[&Landmark; N]> {
        if !self.all_visible(&indices, threshold) {
            return None;
        }
        Some(indices.map(|idx| &self.landmarks[idx as usize]))
    }
}

impl<'de> Deserialize<'de> for LandmarkFrame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let landmarks = match FrameRepr::deserialize(deserializer)? {
            FrameRepr::Bare(landmarks) | FrameRepr::Wrapped { landmarks } => landmarks,
        };
        Self::new(landmarks).map_err(serde::de::Error::custom)
    }
}

impl Serialize for LandmarkFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.landmarks.serialize(serializer)
    }
}
