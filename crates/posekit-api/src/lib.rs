//! # Posekit-API
//!
//! Adapter-facing surface of the posekit analysis core.
//!
//! ## Operations
//!
//! - `DetectionService::handle` - raw request body in, status code and envelope out
//! - `DetectionService::detect` - estimate landmarks from an image payload and analyze them
//! - `DetectionService::health` - service liveness payload
//! - `DetectionService::statistics` - model and input capability payload
//!
//! Transport (routing, CORS, HTTP framing) belongs to the embedding server.
//! Landmark detection itself is delegated to a [`PoseEstimator`].

pub mod config;
pub mod error;
pub mod estimator;
pub mod service;

pub use config::*;
pub use error::*;
pub use estimator::*;
pub use service::*;
