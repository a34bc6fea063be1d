//! Per-slot state machine: upload, camera, recording.

use std::sync::Arc;

use tracing::{debug, info, warn};
use vmatch_models::{
    ControlState, RecordedClip, SlotId, SlotPhase, SlotSnapshot, SourceKind, UploadedFile,
};

use crate::device::{
    CameraDevice, RecorderFactory, StreamConstraints, VideoSurface,
};
use crate::error::CaptureResult;
use crate::session::CaptureSession;

/// Container type recorders produce in the browser host.
const RECORDING_MIME: &str = "video/webm";

/// Owns one slot's readiness, source, and media resources.
///
/// Readiness is derived, never set from outside: a slot is ready iff
/// its surface holds a finalized, playable, non-live source. Starting
/// a camera therefore clears readiness immediately, and only a file
/// upload or a finalized recording restores it.
pub struct SlotController {
    id: SlotId,
    phase: SlotPhase,
    source_kind: SourceKind,
    controls: ControlState,
    surface: Box<dyn VideoSurface>,
    camera: Arc<dyn CameraDevice>,
    recorders: Arc<dyn RecorderFactory>,
    session: Option<CaptureSession>,
}

impl SlotController {
    pub fn new(
        id: SlotId,
        surface: Box<dyn VideoSurface>,
        camera: Arc<dyn CameraDevice>,
        recorders: Arc<dyn RecorderFactory>,
    ) -> Self {
        Self {
            id,
            phase: SlotPhase::Idle,
            source_kind: SourceKind::None,
            controls: ControlState::default(),
            surface,
            camera,
            recorders,
            session: None,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    /// True iff the slot holds a finalized, playable, non-live source.
    pub fn is_ready(&self) -> bool {
        self.source_kind != SourceKind::None
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    /// The surface to rasterize frames from. Meaningful for comparison
    /// only while [`is_ready`](Self::is_ready) holds.
    pub fn surface(&self) -> &dyn VideoSurface {
        self.surface.as_ref()
    }

    /// Current observable state, emitted after every operation.
    pub fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            slot: self.id,
            phase: self.phase,
            source_kind: self.source_kind,
            ready: self.is_ready(),
            controls: self.controls,
        }
    }

    /// Assign an uploaded file as the slot's source.
    ///
    /// File content is passed through unvalidated; malformed media
    /// fails at playback time in the host player. An active camera
    /// session is stopped first, so upload never leaves hardware
    /// tracks running behind a non-live source.
    pub fn upload_file(&mut self, file: UploadedFile) {
        if self.session.is_some() {
            self.stop_camera();
        }
        info!(slot = %self.id, file = %file.name, "file uploaded");
        self.surface.assign_file(&file);
        self.source_kind = SourceKind::Uploaded;
        self.phase = SlotPhase::Idle;
        self.controls = ControlState::default();
    }

    /// Request a live camera stream and show it on the surface.
    ///
    /// Success clears readiness immediately: a live, unrecorded stream
    /// is not a comparable source. On failure the error is returned
    /// and the slot keeps its prior state.
    pub async fn start_camera(&mut self) -> CaptureResult<()> {
        if self.session.is_some() {
            debug!(slot = %self.id, "camera already active, ignoring start");
            return Ok(());
        }

        let constraints = StreamConstraints::default();
        let stream = match self.camera.request_stream(&constraints).await {
            Ok(stream) => stream,
            Err(err) => {
                warn!(slot = %self.id, error = %err, "camera request failed");
                return Err(err);
            }
        };

        let session = CaptureSession::new(stream);
        info!(slot = %self.id, session = %session.id(), "camera started");
        self.session = Some(session);
        self.surface.show_live();
        self.source_kind = SourceKind::None;
        self.phase = SlotPhase::CameraActive;
        self.controls = ControlState::camera_active();
        Ok(())
    }

    /// Stop the active camera session, releasing hardware tracks and
    /// clearing the surface. No-op without a session.
    pub fn stop_camera(&mut self) {
        let Some(session) = self.session.take() else {
            debug!(slot = %self.id, "no camera session, ignoring stop");
            return;
        };
        info!(slot = %self.id, session = %session.id(), "camera stopped");
        session.close();
        self.surface.clear();
        self.phase = SlotPhase::Idle;
        self.controls = ControlState::default();
    }

    /// Start a recording, or finalize the one in progress.
    ///
    /// Finalizing stops the hardware tracks, assembles the buffered
    /// chunks into a playable clip, assigns it as the slot's source,
    /// and marks the slot ready. No-op without a camera session.
    pub async fn toggle_recording(&mut self) -> CaptureResult<()> {
        let recording = match self.session.as_ref() {
            Some(session) => session.is_recording(),
            None => {
                debug!(slot = %self.id, "no camera session, ignoring capture");
                return Ok(());
            }
        };

        if recording {
            self.finalize_recording().await
        } else {
            self.begin_recording()
        }
    }

    fn begin_recording(&mut self) -> CaptureResult<()> {
        if let Some(session) = self.session.as_mut() {
            session.start_recording(self.recorders.as_ref())?;
            info!(slot = %self.id, session = %session.id(), "recording started");
            self.phase = SlotPhase::Recording;
            self.controls = ControlState::recording();
        }
        Ok(())
    }

    async fn finalize_recording(&mut self) -> CaptureResult<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        let session_id = session.id();

        // The session is gone either way once finalize runs, so the
        // controls must stop advertising it even on a recorder error.
        self.phase = SlotPhase::Idle;
        self.controls = ControlState::default();

        let chunks = session.finalize().await?;

        let clip = RecordedClip::from_chunks(RECORDING_MIME, chunks);
        info!(
            slot = %self.id,
            session = %session_id,
            bytes = clip.data.len(),
            "recording finalized"
        );
        self.surface.assign_clip(&clip);
        // Capture stays disabled until the camera is restarted.
        self.source_kind = SourceKind::Recorded;
        Ok(())
    }
}
