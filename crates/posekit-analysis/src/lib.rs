//! # Posekit-Analysis
//!
//! Biomechanical feature extraction from a single [`LandmarkFrame`].
//!
//! ## Components
//!
//! - **Distances** - a fixed catalogue of 11 named segment lengths
//! - **Angles** - a fixed catalogue of 6 named joint angles
//! - **Classification** - an ordered rule table producing a coarse pose label
//! - **Pipeline** - runs all three and assembles an [`AnalysisResult`]
//!
//! Every catalogue entry is gated on landmark visibility: entries whose
//! points are missing or not confidently detected are skipped, never reported
//! as errors. All analyzers are stateless and can be shared across threads.
//!
//! [`LandmarkFrame`]: posekit_core::LandmarkFrame

pub mod angle;
pub mod classifier;
pub mod config;
pub mod distance;
pub mod pipeline;

pub use angle::*;
pub use classifier::*;
pub use config::*;
pub use distance::*;
pub use pipeline::*;
