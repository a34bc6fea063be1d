//! Classifier service request/response types.

use serde::{Deserialize, Serialize};
use vmatch_models::Prediction;

/// Request for single-frame classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Base64-encoded PNG of the frame
    pub image: String,
    /// How many predictions to return
    pub top_k: usize,
}

/// Response from frame classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Predictions, expected most-confident first (re-sorted on
    /// receipt regardless)
    pub predictions: Vec<Prediction>,
}

/// Model description returned while loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: Option<String>,
}
