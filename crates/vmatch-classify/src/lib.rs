//! Classifier collaborator for the vmatch engine.
//!
//! The pretrained image model is an external service, consumed over
//! HTTP and never reimplemented here. This crate provides the client,
//! the [`FrameClassifier`] seam the orchestrator depends on, and the
//! process-wide model handle loaded once at startup.

pub mod client;
pub mod error;
pub mod model;
pub mod types;

mod encode;

pub use client::{ClassifierClient, ClassifierConfig, FrameClassifier};
pub use error::{ClassifyError, ClassifyResult};
pub use types::{ClassifyRequest, ClassifyResponse, ModelInfo};
