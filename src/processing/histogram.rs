use super::grayscale::to_luma;
use crate::errors::Result;
use image::{DynamicImage, GrayImage};

pub const HISTOGRAM_BINS: usize = 256;

/// Pixel counts per 8-bit intensity level. Always exactly 256 bins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u32; HISTOGRAM_BINS],
}

impl Histogram {
    pub fn from_bins(bins: [u32; HISTOGRAM_BINS]) -> Self {
        Self { bins }
    }

    pub fn of_gray(image: &GrayImage) -> Self {
        Self {
            bins: imageproc::stats::histogram(image).channels[0],
        }
    }

    pub fn bins(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.bins
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&count| count as u64).sum()
    }

    pub fn max(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}

// Calculate intensity histogram, converting color input to grayscale first
pub fn calculate_histogram(image: &DynamicImage) -> Result<Histogram> {
    let gray = to_luma(image)?;
    Ok(Histogram::of_gray(&gray))
}
