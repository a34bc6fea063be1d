//! Comparison verdicts and the per-comparison report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prediction::Prediction;

/// Outcome of comparing the top-1 labels of two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Match,
    NoMatch,
}

impl Verdict {
    /// Derive a verdict from two top-1 labels by string equality.
    ///
    /// No confidence thresholding, no multi-label comparison: the same
    /// top class on both sides is a match, anything else is not.
    pub fn from_labels(a: &str, b: &str) -> Self {
        if a == b {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Match => write!(f, "Match"),
            Verdict::NoMatch => write!(f, "No Match"),
        }
    }
}

/// Full record of one comparison, computed fresh per request and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Match/NoMatch outcome
    pub verdict: Verdict,
    /// Top-1 label for slot A (sentinel "Unknown" if none)
    pub label_a: String,
    /// Top-1 label for slot B (sentinel "Unknown" if none)
    pub label_b: String,
    /// Complete prediction sequence for slot A, most-confident first
    pub predictions_a: Vec<Prediction>,
    /// Complete prediction sequence for slot B, most-confident first
    pub predictions_b: Vec<Prediction>,
    /// When the comparison ran
    pub compared_at: DateTime<Utc>,
}
