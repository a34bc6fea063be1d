//! Error types for comparison operations.

use thiserror::Error;
use vmatch_classify::ClassifyError;
use vmatch_models::SlotId;

pub type CompareResult<T> = Result<T, CompareError>;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("classifier model is not loaded")]
    ModelUnavailable,

    #[error("slot {0} is not ready for comparison")]
    SlotNotReady(SlotId),

    #[error("video element has no loaded frame to extract")]
    DegenerateFrame,

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
