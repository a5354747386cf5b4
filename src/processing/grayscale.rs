use crate::errors::{ReportError, Result};
use image::{imageops, DynamicImage, GrayImage, RgbImage};

/// Single-channel intensity view of a color or grayscale image.
///
/// Color images are reduced with the `image` crate's luma weights. Any layout
/// other than one or three channels (gray+alpha, RGBA) is rejected.
pub fn to_luma(image: &DynamicImage) -> Result<GrayImage> {
    match image.color().channel_count() {
        1 | 3 => Ok(image.to_luma8()),
        channels => Err(ReportError::UnsupportedLayout { channels }),
    }
}

/// Replicate a single intensity channel across R, G and B.
pub fn gray_to_rgb(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        image::Rgb([v, v, v])
    })
}

/// Convert a color image into a gray-looking image that keeps three channels,
/// so it can be placed next to color panels without special handling.
pub fn convert_to_gray(image: &RgbImage) -> RgbImage {
    gray_to_rgb(&imageops::grayscale(image))
}
