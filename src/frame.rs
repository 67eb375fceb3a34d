//! Decoding of still frames into the raster the sampler reads.
//!
//! The sampler itself never decodes; it works on any [`RasterImage`], and
//! `DynamicImage` is one.
//!
//! [`RasterImage`]: crate::sampling::RasterImage
use std::path::Path;

use image::DynamicImage;

use crate::errors::ScreenHueResult;

/// Decode an in-memory JPEG/PNG/GIF/... frame, sniffing the format from its header.
pub fn decode(bytes: &[u8]) -> ScreenHueResult<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    tracing::debug!(width = img.width(), height = img.height(), "frame decoded");
    Ok(img)
}

/// Open and decode a frame from disk.
pub fn open(path: &Path) -> ScreenHueResult<DynamicImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "frame opened"
    );
    Ok(img)
}
