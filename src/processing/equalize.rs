use super::grayscale::{gray_to_rgb, to_luma};
use crate::errors::Result;
use image::{DynamicImage, RgbImage};
use imageproc::contrast::equalize_histogram;

/// Equalize the intensity histogram and hand back a three-channel result.
///
/// Color input is reduced to grayscale first. A constant image stays constant:
/// the CDF jumps straight to the total, so every pixel maps to the same level.
pub fn histogram_equalization(image: &DynamicImage) -> Result<RgbImage> {
    let gray = to_luma(image)?;
    let equalized = equalize_histogram(&gray);
    tracing::trace!(width = gray.width(), height = gray.height(), "equalized histogram");
    Ok(gray_to_rgb(&equalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::histogram::Histogram;
    use image::{imageops, GrayImage, Luma, Rgb};

    #[test]
    fn test_output_keeps_dimensions_and_three_channels() {
        let rgb = RgbImage::from_fn(20, 10, |x, y| Rgb([(x * 10) as u8, (y * 20) as u8, 50]));
        let equalized = histogram_equalization(&DynamicImage::ImageRgb8(rgb)).unwrap();

        assert_eq!(equalized.dimensions(), (20, 10));
        for pixel in equalized.pixels() {
            assert_eq!(pixel.0[0], pixel.0[1]);
            assert_eq!(pixel.0[0], pixel.0[2]);
        }
    }

    #[test]
    fn test_low_contrast_range_is_stretched() {
        // Intensities squeezed into 100..=115
        let gray = GrayImage::from_fn(16, 16, |x, _| Luma([100 + x as u8]));
        let equalized = histogram_equalization(&DynamicImage::ImageLuma8(gray)).unwrap();

        let levels = imageops::grayscale(&equalized);
        let min = levels.pixels().map(|p| p.0[0]).min().unwrap();
        let max = levels.pixels().map(|p| p.0[0]).max().unwrap();
        assert_eq!(max, 255);
        assert!(max - min > 200, "range {}..{} was not stretched", min, max);
    }

    #[test]
    fn test_constant_image_collapses_to_one_bin() {
        let gray = GrayImage::from_pixel(12, 9, Luma([42]));
        let equalized = histogram_equalization(&DynamicImage::ImageLuma8(gray)).unwrap();

        let hist = Histogram::of_gray(&imageops::grayscale(&equalized));
        let occupied: Vec<usize> = hist
            .bins()
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(bin, _)| bin)
            .collect();
        assert_eq!(occupied.len(), 1);
        assert_eq!(hist.bins()[occupied[0]], 12 * 9);
    }

    #[test]
    fn test_rejects_rgba() {
        let rgba = DynamicImage::new_rgba8(4, 4);
        assert!(histogram_equalization(&rgba).is_err());
    }
}
