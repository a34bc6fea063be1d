//! Classifier client error types.

use thiserror::Error;

pub type ClassifyResult<T> = Result<T, ClassifyError>;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("classify request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("frame pixel buffer does not match its dimensions")]
    MalformedFrame,

    #[error("frame encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
