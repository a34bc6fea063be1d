//! Error types for capture operations.

use thiserror::Error;

/// Result type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Errors surfaced by the camera and recorder collaborators.
///
/// Capture/record actions on a slot with no active camera session are
/// no-ops by contract, not errors, so there is no variant for them.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera access denied: {0}")]
    CameraAccessDenied(String),

    #[error("no camera device available: {0}")]
    CameraUnavailable(String),

    #[error("recorder failed: {0}")]
    RecorderFailed(String),
}
