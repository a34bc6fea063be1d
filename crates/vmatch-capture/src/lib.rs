//! Capture side of the vmatch engine.
//!
//! Two [`SlotController`] instances own the per-slot state machines
//! (idle / camera active / recording) and all media resources. The
//! camera, the recorder, and the video element are host collaborators
//! consumed through the traits in [`device`]; this crate sequences
//! them and never touches hardware itself.

pub mod device;
pub mod error;
pub mod session;
pub mod slot;

pub use device::{
    CameraDevice, MediaChunk, MediaStream, RecorderFactory, RecorderState, StreamConstraints,
    StreamRecorder, VideoSurface,
};
pub use error::{CaptureError, CaptureResult};
pub use session::CaptureSession;
pub use slot::SlotController;
