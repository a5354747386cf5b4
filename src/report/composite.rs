use super::draw::{draw_histogram, PanelBounds};
use super::text::draw_text_mut;
use crate::errors::Result;
use crate::processing::align::{align_images, concat_horizontally};
use crate::processing::equalize::histogram_equalization;
use crate::processing::grayscale::{convert_to_gray, to_luma};
use crate::processing::histogram::{calculate_histogram, Histogram};
use crate::settings::ReportStyle;
use image::{imageops, DynamicImage, RgbImage};

/// The three panels of a report and their histograms.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub color_image: &'a RgbImage,
    pub gray_image: &'a RgbImage,
    pub equalized_image: &'a RgbImage,
    pub color_hist: &'a Histogram,
    pub gray_hist: &'a Histogram,
    pub equalized_hist: &'a Histogram,
}

/// Build the annotated report image.
///
/// Layout: the three aligned images side by side on top, three equal-width
/// histogram panels below them (as tall as the images), a label under each
/// image and the test name near the bottom edge.
pub fn create_output_image(inputs: &ReportInputs<'_>, test_name: &str, style: &ReportStyle) -> Result<RgbImage> {
    style.validate()?;
    let background = style.background();

    let aligned = align_images(
        &[inputs.color_image, inputs.gray_image, inputs.equalized_image],
        background,
    )?;
    let combined = concat_horizontally(&aligned, background);
    let (width, height) = combined.dimensions();

    // Histogram panels match the aligned image height
    let hist_height = height;
    let output_height = height + hist_height;

    let mut output = RgbImage::from_pixel(width, output_height, background);
    imageops::replace(&mut output, &combined, 0, 0);

    let hist_width = width / 3;
    let histograms = [inputs.color_hist, inputs.gray_hist, inputs.equalized_hist];
    for (index, histogram) in histograms.into_iter().enumerate() {
        let index = index as u32;
        let panel = PanelBounds {
            height: hist_height,
            offset: height,
            start_col: hist_width * index,
            end_col: hist_width * (index + 1),
        };
        draw_histogram(&mut output, histogram, panel, style)?;
    }

    let label_color = style.label();
    let label_baseline = to_coord(height as i64 + style.label_offset as i64);
    let labels = [&style.color_label, &style.gray_label, &style.equalized_label];
    for (index, label) in labels.into_iter().enumerate() {
        let x = to_coord(hist_width as i64 * index as i64 + style.label_margin as i64);
        draw_text_mut(&mut output, label_color, x, label_baseline, style.label_scale, label);
    }

    let test_label = format!("{}{}", style.test_name_prefix, test_name);
    let test_baseline = to_coord(output_height as i64 - style.test_name_offset as i64);
    draw_text_mut(
        &mut output,
        label_color,
        to_coord(style.label_margin as i64),
        test_baseline,
        style.label_scale,
        &test_label,
    );

    tracing::debug!(test_name, width, height = output_height, hist_width, "assembled report image");
    Ok(output)
}

// Positions past the i32 range are off-canvas either way
fn to_coord(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Derive the gray and equalized panels from one source image and assemble the report.
pub fn build_report(image: &DynamicImage, test_name: &str, style: &ReportStyle) -> Result<RgbImage> {
    // Rejects layouts other than gray or RGB before anything is derived
    to_luma(image)?;

    let color_image = image.to_rgb8();
    let gray_image = convert_to_gray(&color_image);
    let equalized_image = histogram_equalization(image)?;

    let color_hist = calculate_histogram(image)?;
    let gray_hist = Histogram::of_gray(&imageops::grayscale(&gray_image));
    let equalized_hist = Histogram::of_gray(&imageops::grayscale(&equalized_image));

    let inputs = ReportInputs {
        color_image: &color_image,
        gray_image: &gray_image,
        equalized_image: &equalized_image,
        color_hist: &color_hist,
        gray_hist: &gray_hist,
        equalized_hist: &equalized_hist,
    };
    create_output_image(&inputs, test_name, style)
}
