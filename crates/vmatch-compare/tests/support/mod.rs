//! Shared host-collaborator fakes for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use vmatch_capture::{
    CameraDevice, CaptureResult, MediaChunk, MediaStream, RecorderFactory, RecorderState,
    SlotController, StreamConstraints, StreamRecorder, VideoSurface,
};
use vmatch_models::{RasterFrame, RecordedClip, SlotId, UploadedFile};

/// Surface producing 2x2 frames filled with a tag byte, so tests can
/// tell the two slots' frames apart.
pub struct TaggedSurface {
    tag: u8,
    has_source: bool,
}

impl TaggedSurface {
    pub fn new(tag: u8) -> Self {
        Self {
            tag,
            has_source: false,
        }
    }
}

impl VideoSurface for TaggedSurface {
    fn show_live(&mut self) {
        self.has_source = false;
    }

    fn assign_file(&mut self, _file: &UploadedFile) {
        self.has_source = true;
    }

    fn assign_clip(&mut self, _clip: &RecordedClip) {
        self.has_source = true;
    }

    fn clear(&mut self) {
        self.has_source = false;
    }

    fn frame_size(&self) -> (u32, u32) {
        if self.has_source {
            (2, 2)
        } else {
            (0, 0)
        }
    }

    fn read_frame(&self) -> RasterFrame {
        if self.has_source {
            RasterFrame::new(2, 2, vec![self.tag; 16])
        } else {
            RasterFrame::degenerate()
        }
    }
}

pub struct GrantingCamera {
    pub stops: Arc<AtomicUsize>,
}

struct CountingStream {
    stops: Arc<AtomicUsize>,
}

impl MediaStream for CountingStream {
    fn stop_all_tracks(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CameraDevice for GrantingCamera {
    async fn request_stream(
        &self,
        _constraints: &StreamConstraints,
    ) -> CaptureResult<Box<dyn MediaStream>> {
        Ok(Box::new(CountingStream {
            stops: self.stops.clone(),
        }))
    }
}

struct ChunkRecorder {
    chunks: Vec<MediaChunk>,
    state: RecorderState,
}

#[async_trait]
impl StreamRecorder for ChunkRecorder {
    fn start(&mut self) -> CaptureResult<()> {
        self.state = RecorderState::Recording;
        Ok(())
    }

    async fn stop(&mut self) -> CaptureResult<Vec<MediaChunk>> {
        self.state = RecorderState::Inactive;
        Ok(std::mem::take(&mut self.chunks))
    }

    fn state(&self) -> RecorderState {
        self.state
    }
}

pub struct ChunkFactory;

impl RecorderFactory for ChunkFactory {
    fn create_recorder(&self, _stream: &dyn MediaStream) -> Box<dyn StreamRecorder> {
        Box::new(ChunkRecorder {
            chunks: vec![vec![0xde, 0xad], vec![0xbe, 0xef]],
            state: RecorderState::Inactive,
        })
    }
}

/// A slot wired to granting fakes, with its frames tagged for the
/// classifier stubs.
pub fn tagged_slot(id: SlotId, tag: u8) -> SlotController {
    SlotController::new(
        id,
        Box::new(TaggedSurface::new(tag)),
        Arc::new(GrantingCamera {
            stops: Arc::new(AtomicUsize::new(0)),
        }),
        Arc::new(ChunkFactory),
    )
}
