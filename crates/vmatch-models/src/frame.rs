//! Raster frames extracted from a slot's video element.

use serde::{Deserialize, Serialize};

/// A single still frame in RGBA8 layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterFrame {
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl RasterFrame {
    /// Build a frame from raw RGBA8 pixels.
    ///
    /// Callers must supply exactly `width * height * 4` bytes; short or
    /// long buffers indicate a capture bug in the host surface.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A frame with zero area, produced when a video element has not
    /// loaded any frame yet.
    pub fn degenerate() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// True when the frame has no pixels to classify.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
