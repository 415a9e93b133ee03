//! Interop with the `image` crate
//!
//! The pipeline starts from a decoded in-memory RGB buffer; callers that
//! decode with the `image` crate enter and leave through these conversions.
//! Alpha, if present upstream, must be stripped by the caller
//! (`DynamicImage::to_rgb8`); the pipeline never reads it.

use crate::error::{Error, Result};
use crate::{Color, PixelBuffer};
use image::RgbImage;

/// Convert a decoded `RgbImage` into a [`PixelBuffer`].
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if the image has a zero dimension.
pub fn from_rgb_image(img: &RgbImage) -> Result<PixelBuffer> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let data = img
        .pixels()
        .map(|p| Color::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    PixelBuffer::from_vec(width, height, data)
}

/// Convert a [`PixelBuffer`] back into an `RgbImage`.
pub fn to_rgb_image(pix: &PixelBuffer) -> RgbImage {
    let (width, height) = pix.dimensions();
    let mut img = RgbImage::new(width, height);
    for ((x, y), &c) in pix.cells() {
        img.put_pixel(x, y, image::Rgb(c.channels()));
    }
    img
}
