//! Shared data models for the vmatch comparison engine.
//!
//! This crate provides Serde-serializable types for:
//! - Capture slots and their control-state outputs
//! - Uploaded files and finalized recording clips
//! - Raster frames handed to the classifier
//! - Classifier predictions and comparison verdicts

pub mod frame;
pub mod prediction;
pub mod slot;
pub mod source;
pub mod verdict;

// Re-export common types
pub use frame::RasterFrame;
pub use prediction::{top_label, Prediction, UNKNOWN_LABEL};
pub use slot::{CaptureLabel, ControlState, SlotId, SlotPhase, SlotSnapshot};
pub use source::{RecordedClip, SourceKind, UploadedFile};
pub use verdict::{ComparisonReport, Verdict};
