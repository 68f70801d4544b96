//! Error types for the posekit system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Too many landmarks: a frame holds at most 33, got {count}")]
    TooManyLandmarks { count: usize },

    #[error("Landmark index mismatch: position {position} carries index {index}")]
    IndexMismatch { position: usize, index: usize },

    #[error("Pose estimation error: {0}")]
    Estimator(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::TooManyLandmarks { count: 34 };
        assert_eq!(err.to_string(), "Too many landmarks: a frame holds at most 33, got 34");

        let err = Error::IndexMismatch { position: 2, index: 5 };
        assert_eq!(err.to_string(), "Landmark index mismatch: position 2 carries index 5");
    }
}
