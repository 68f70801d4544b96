//! Request-level errors raised by the detection service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No image data provided")]
    MissingImage,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    /// HTTP status the embedding server should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::MissingImage | ServiceError::InvalidRequest(_) => 400,
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::InvalidRequest(e.to_string())
    }
}
