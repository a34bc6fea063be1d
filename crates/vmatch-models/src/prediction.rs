//! Classifier prediction sequences.

use serde::{Deserialize, Serialize};

/// Sentinel label used when a classifier returns no predictions for a
/// frame. Two empty sequences therefore compare as equal.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One (label, confidence) entry from the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class name, e.g. "tabby cat"
    pub label: String,
    /// Model confidence in [0, 1]
    pub confidence: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Top-1 label of a most-confident-first prediction sequence, or the
/// [`UNKNOWN_LABEL`] sentinel for an empty sequence.
pub fn top_label(predictions: &[Prediction]) -> &str {
    predictions
        .first()
        .map(|p| p.label.as_str())
        .unwrap_or(UNKNOWN_LABEL)
}
