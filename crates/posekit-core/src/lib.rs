//! # Posekit-Core
//!
//! Core types and geometry for the posekit body landmark analysis system.
//!
//! A pose-estimation model produces a [`LandmarkFrame`]: up to 33 labeled
//! 3D points in normalized image coordinates, each with a visibility score.
//! This crate owns that data model, the fixed index→name table, the skeleton
//! connectivity table and the 3D vector operations the analyzers build on.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::*;
pub use types::*;
