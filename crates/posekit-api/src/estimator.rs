//! Pose estimation collaborator interface.

use async_trait::async_trait;
use posekit_core::{LandmarkFrame, Result};

/// Produces a landmark frame from an encoded image.
///
/// Implementations own image decoding and model invocation. An image with no
/// detectable body yields `Ok` with an empty frame; decode or model failures
/// are reported as [`posekit_core::Error::Estimator`].
#[async_trait]
pub trait PoseEstimator: Send + Sync {
    /// Model name reported by the statistics endpoint
    fn name(&self) -> &str;

    /// Estimate landmarks from a base64 image payload (data-URL prefix already removed)
    async fn estimate(&self, image: &str) -> Result<LandmarkFrame>;
}
