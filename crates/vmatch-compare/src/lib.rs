//! Comparison side of the vmatch engine.
//!
//! [`CompareGate`] combines both slots' readiness into the single
//! enable/disable decision for the compare control;
//! [`ComparisonOrchestrator`] extracts one frame per slot, runs both
//! through the external classifier, and derives a top-1 label verdict.

pub mod coordinator;
pub mod error;
pub mod extractor;
pub mod orchestrator;

pub use coordinator::{is_compare_enabled, CompareGate};
pub use error::{CompareError, CompareResult};
pub use extractor::extract_frame;
pub use orchestrator::ComparisonOrchestrator;
