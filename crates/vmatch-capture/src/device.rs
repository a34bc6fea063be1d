//! Host collaborator traits.
//!
//! The engine consumes the host's camera, recorder, and video-element
//! APIs through these seams. Implementations live in the host shell
//! (the browser bridge in production, fakes in tests); nothing here is
//! reimplemented in this workspace.

use async_trait::async_trait;
use vmatch_models::{RasterFrame, RecordedClip, UploadedFile};

use crate::error::CaptureResult;

/// One buffered chunk delivered by a recorder.
pub type MediaChunk = Vec<u8>;

/// Constraints passed to the camera when requesting a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    pub video: bool,
    pub audio: bool,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        // Matches the original request: video only.
        Self {
            video: true,
            audio: false,
        }
    }
}

/// The host's camera API.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Request a live stream. Suspends until the user grants or denies
    /// access; there is no timeout, so a collaborator that never
    /// resolves will hang the requesting flow.
    async fn request_stream(
        &self,
        constraints: &StreamConstraints,
    ) -> CaptureResult<Box<dyn MediaStream>>;
}

/// A live media stream holding hardware tracks.
pub trait MediaStream: Send {
    /// Release every underlying hardware track. The engine calls this
    /// exactly once per stream, when the session ends.
    fn stop_all_tracks(&mut self);
}

/// Recorder lifecycle state, mirroring the host recorder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Inactive,
    Recording,
}

/// The host's media recorder API.
///
/// Finalization is a single suspending operation: [`StreamRecorder::stop`]
/// resolves only once the final chunk has been flushed, so readiness
/// reads after it are deterministic.
#[async_trait]
pub trait StreamRecorder: Send {
    /// Begin buffering chunks from the attached stream.
    fn start(&mut self) -> CaptureResult<()>;

    /// Stop recording and return every buffered chunk, in order.
    async fn stop(&mut self) -> CaptureResult<Vec<MediaChunk>>;

    fn state(&self) -> RecorderState;
}

/// Creates a recorder bound to a live stream.
pub trait RecorderFactory: Send + Sync {
    fn create_recorder(&self, stream: &dyn MediaStream) -> Box<dyn StreamRecorder>;
}

/// The slot's video element.
///
/// The engine tells the surface what it should be showing; the host
/// implementation owns the actual element and its playback plumbing.
pub trait VideoSurface: Send {
    /// Show the live camera preview (playback controls hidden).
    fn show_live(&mut self);

    /// Assign an uploaded file as the playable source.
    fn assign_file(&mut self, file: &UploadedFile);

    /// Assign a finalized recording as the playable source.
    fn assign_clip(&mut self, clip: &RecordedClip);

    /// Detach whatever source is assigned.
    fn clear(&mut self);

    /// Natural (width, height) of the loaded video, (0, 0) before any
    /// frame has loaded.
    fn frame_size(&self) -> (u32, u32);

    /// Rasterize the current frame.
    fn read_frame(&self) -> RasterFrame;
}
