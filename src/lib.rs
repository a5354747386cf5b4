//! Diagnostic composite images for visual test reports.
//!
//! A report shows a color image, its grayscale conversion and its
//! histogram-equalized version side by side, with each image's intensity
//! histogram drawn underneath and a label naming the panel and the test case.

pub mod errors;
pub mod logging;
pub mod processing;
pub mod report;
pub mod settings;


pub use errors::{ReportError, Result};
pub use processing::{
    align_images, calculate_histogram, convert_to_gray, histogram_equalization, Histogram,
    HISTOGRAM_BINS,
};
pub use report::{build_report, create_output_image, draw_histogram, PanelBounds, ReportInputs};
pub use settings::ReportStyle;
