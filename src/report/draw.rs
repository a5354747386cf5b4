use crate::errors::{ReportError, Result};
use crate::processing::histogram::{Histogram, HISTOGRAM_BINS};
use crate::settings::ReportStyle;
use image::RgbImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Where a histogram panel sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelBounds {
    /// Panel height; bars are scaled into `0..=height`.
    pub height: u32,
    /// Row of the panel's top edge.
    pub offset: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl PanelBounds {
    pub fn width(&self) -> u32 {
        self.end_col.saturating_sub(self.start_col)
    }

    pub fn bottom(&self) -> u32 {
        self.offset + self.height
    }
}

/// Render `histogram` as vertical bars inside `panel`, mutating `canvas` in place.
///
/// Counts are normalized by the largest count. Each of the 256 bins gets
/// `panel.width() / 256` columns (floored), so a panel narrower than 256 pixels
/// gets no bars and the columns past `256 * bin_width` stay untouched. A
/// separator stripe is then drawn on `end_col` from the canvas top down to the
/// panel bottom.
///
/// Fails with [`ReportError::EmptyHistogram`] when every count is zero; the
/// canvas is left untouched in that case.
pub fn draw_histogram(
    canvas: &mut RgbImage,
    histogram: &Histogram,
    panel: PanelBounds,
    style: &ReportStyle,
) -> Result<()> {
    style.validate()?;
    if panel.end_col < panel.start_col {
        return Err(ReportError::InvalidPanel {
            start_col: panel.start_col,
            end_col: panel.end_col,
        });
    }

    let max_val = histogram.max();
    if max_val == 0 {
        return Err(ReportError::EmptyHistogram);
    }

    let bin_width = panel.width() / HISTOGRAM_BINS as u32;
    let bottom = panel.bottom();

    if bin_width > 0 {
        for (i, &count) in histogram.bins().iter().enumerate() {
            let bar_height = (count as f64 / max_val as f64 * panel.height as f64) as u32;
            if bar_height == 0 {
                continue;
            }
            let x = panel.start_col + bin_width * i as u32;
            let rect = Rect::at(x as i32, (bottom - bar_height) as i32).of_size(bin_width, bar_height);
            draw_filled_rect_mut(canvas, rect, style.bar());
        }
    }

    if bottom > 0 {
        let thickness = style.separator_thickness;
        let x = panel.end_col as i32 - (thickness / 2) as i32;
        draw_filled_rect_mut(canvas, Rect::at(x, 0).of_size(thickness, bottom), style.separator());
    }

    tracing::trace!(
        start_col = panel.start_col,
        end_col = panel.end_col,
        bin_width,
        max = max_val,
        "drew histogram panel"
    );
    Ok(())
}
