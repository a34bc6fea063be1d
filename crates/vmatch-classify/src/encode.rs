//! Frame-to-wire encoding: RGBA8 raster to base64 PNG.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use vmatch_models::RasterFrame;

use crate::error::{ClassifyError, ClassifyResult};

/// Encode a frame as a base64 PNG string for the classify request body.
pub(crate) fn frame_to_base64_png(frame: &RasterFrame) -> ClassifyResult<String> {
    let image = RgbaImage::from_raw(frame.width, frame.height, frame.pixels.clone())
        .ok_or(ClassifyError::MalformedFrame)?;

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)?;

    Ok(BASE64.encode(png))
}
