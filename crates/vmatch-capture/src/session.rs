//! Capture sessions: camera stream plus optional in-progress recording.

use tracing::debug;
use uuid::Uuid;

use crate::device::{MediaChunk, MediaStream, RecorderFactory, RecorderState, StreamRecorder};
use crate::error::CaptureResult;

/// A slot's active camera session.
///
/// Exists only while the camera is live; owns the stream's hardware
/// tracks and, once recording starts, the recorder buffering chunks
/// from it. Consuming the session ([`close`](Self::close) or
/// [`finalize`](Self::finalize)) stops the tracks exactly once.
pub struct CaptureSession {
    id: Uuid,
    stream: Box<dyn MediaStream>,
    recorder: Option<Box<dyn StreamRecorder>>,
}

impl CaptureSession {
    pub fn new(stream: Box<dyn MediaStream>) -> Self {
        Self {
            id: Uuid::new_v4(),
            stream,
            recorder: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// True while an attached recorder is actively buffering.
    pub fn is_recording(&self) -> bool {
        self.recorder
            .as_ref()
            .map(|r| r.state() == RecorderState::Recording)
            .unwrap_or(false)
    }

    /// Create a recorder for this session's stream and start it.
    pub fn start_recording(&mut self, factory: &dyn RecorderFactory) -> CaptureResult<()> {
        let mut recorder = factory.create_recorder(self.stream.as_ref());
        recorder.start()?;
        self.recorder = Some(recorder);
        Ok(())
    }

    /// Finalize an in-progress recording: stop the recorder, wait for
    /// the last chunk to flush, then release the hardware tracks.
    ///
    /// The tracks are released even when the recorder fails, so a
    /// finalize error never leaves the camera running.
    pub async fn finalize(mut self) -> CaptureResult<Vec<MediaChunk>> {
        let chunks = match self.recorder.take() {
            Some(mut recorder) => recorder.stop().await,
            None => Ok(Vec::new()),
        };
        self.stream.stop_all_tracks();
        debug!(session = %self.id, "capture session finalized");
        chunks
    }

    /// Tear the session down without finalizing. Any in-progress
    /// recording is discarded along with its buffered chunks.
    pub fn close(mut self) {
        self.recorder = None;
        self.stream.stop_all_tracks();
        debug!(session = %self.id, "capture session closed");
    }
}
