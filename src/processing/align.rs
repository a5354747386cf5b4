use crate::errors::{ReportError, Result};
use image::{imageops, Rgb, RgbImage};

/// Pad every image with a solid border so the batch shares one size.
///
/// The target size is the largest height and the largest width in the batch.
/// Odd shortfalls put the extra row below and the extra column on the right.
/// Images are never cropped.
pub fn align_images(images: &[&RgbImage], border: Rgb<u8>) -> Result<Vec<RgbImage>> {
    let max_height = images.iter().map(|image| image.height()).max().ok_or(ReportError::EmptyImageSet)?;
    let max_width = images.iter().map(|image| image.width()).max().ok_or(ReportError::EmptyImageSet)?;

    let aligned = images
        .iter()
        .map(|&image| {
            let (width, height) = image.dimensions();
            if width == max_width && height == max_height {
                return image.clone();
            }

            let top = (max_height - height) / 2;
            let left = (max_width - width) / 2;

            let mut padded = RgbImage::from_pixel(max_width, max_height, border);
            imageops::replace(&mut padded, image, left as i64, top as i64);
            padded
        })
        .collect();

    Ok(aligned)
}

/// Place images left to right on a canvas as tall as the tallest one.
pub fn concat_horizontally(images: &[RgbImage], background: Rgb<u8>) -> RgbImage {
    let width = images.iter().map(|image| image.width()).sum();
    let height = images.iter().map(|image| image.height()).max().unwrap_or(0);

    let mut combined = RgbImage::from_pixel(width, height, background);
    let mut x = 0i64;
    for image in images {
        imageops::replace(&mut combined, image, x, 0);
        x += image.width() as i64;
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const INK: Rgb<u8> = Rgb([10, 20, 30]);

    fn count_pixels(image: &RgbImage, color: Rgb<u8>) -> usize {
        image.pixels().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_empty_batch_fails() {
        let err = align_images(&[], WHITE).unwrap_err();
        assert!(matches!(err, ReportError::EmptyImageSet));
    }

    #[test]
    fn test_equal_sizes_are_unchanged() {
        let a = RgbImage::from_fn(8, 6, |x, y| Rgb([x as u8, y as u8, 3]));
        let b = RgbImage::from_pixel(8, 6, INK);

        let aligned = align_images(&[&a, &b], WHITE).unwrap();
        assert_eq!(aligned, vec![a, b]);
    }

    #[test]
    fn test_mixed_sizes_share_maximum() {
        let tall = RgbImage::from_pixel(4, 10, INK);
        let wide = RgbImage::from_pixel(9, 3, INK);
        let small = RgbImage::from_pixel(2, 2, INK);

        let aligned = align_images(&[&tall, &wide, &small], WHITE).unwrap();

        assert_eq!(aligned.len(), 3);
        for (image, source) in aligned.iter().zip([&tall, &wide, &small]) {
            assert_eq!(image.dimensions(), (9, 10));

            let (w, h) = source.dimensions();
            let added = (10 - h) * w + (9 - w) * 10;
            assert_eq!(count_pixels(image, WHITE), added as usize);
            assert_eq!(count_pixels(image, INK), (w * h) as usize);
        }
    }

    #[test]
    fn test_odd_padding_goes_bottom_right() {
        // 3 rows and 3 columns short: one before, two after.
        let small = RgbImage::from_pixel(2, 2, INK);
        let big = RgbImage::from_pixel(5, 5, WHITE);

        let aligned = align_images(&[&small, &big], WHITE).unwrap();
        let padded = &aligned[0];

        assert_eq!(*padded.get_pixel(0, 0), WHITE);
        assert_eq!(*padded.get_pixel(1, 1), INK);
        assert_eq!(*padded.get_pixel(2, 2), INK);
        assert_eq!(*padded.get_pixel(3, 3), WHITE);
        assert_eq!(*padded.get_pixel(3, 1), WHITE);
        assert_eq!(*padded.get_pixel(1, 3), WHITE);
    }

    #[test]
    fn test_concat_places_images_in_order() {
        let left = RgbImage::from_pixel(3, 2, INK);
        let right = RgbImage::from_pixel(4, 2, Rgb([200, 0, 0]));

        let combined = concat_horizontally(&[left, right], WHITE);

        assert_eq!(combined.dimensions(), (7, 2));
        assert_eq!(*combined.get_pixel(2, 1), INK);
        assert_eq!(*combined.get_pixel(3, 0), Rgb([200, 0, 0]));
    }
}
