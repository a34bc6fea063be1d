//! Single-frame extraction from a slot's video element.

use vmatch_capture::VideoSurface;
use vmatch_models::RasterFrame;

use crate::error::{CompareError, CompareResult};

/// Capture one raster frame from a playable video element.
///
/// A video element that has not loaded a frame yet reports zero
/// natural width or height; extracting from it would yield a
/// degenerate frame, so that is rejected here. The orchestrator
/// additionally requires slot readiness before calling this.
pub fn extract_frame(surface: &dyn VideoSurface) -> CompareResult<RasterFrame> {
    let (width, height) = surface.frame_size();
    if width == 0 || height == 0 {
        return Err(CompareError::DegenerateFrame);
    }

    let frame = surface.read_frame();
    if frame.is_degenerate() {
        return Err(CompareError::DegenerateFrame);
    }
    Ok(frame)
}
