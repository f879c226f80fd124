//! Contributor × bin heatmaps

use super::canvas::{ramp_color, Canvas, GRAY};
use crate::stats::HistogramRow;
use image::RgbImage;

/// Cell size in pixels
const CELL_WIDTH: u32 = 24;
const CELL_HEIGHT: u32 = 48;

/// Gap between cells
const GAP: u32 = 1;

/// Draw one row per contributor and one column per bin
///
/// Cells are coloured relative to the largest value in the whole grid.
pub fn draw_heatmap(rows: &[HistogramRow]) -> RgbImage {
    let columns = rows.iter().map(|r| r.bins.len()).max().unwrap_or(0) as u32;
    let width = columns * (CELL_WIDTH + GAP) + GAP;
    let height = rows.len() as u32 * (CELL_HEIGHT + GAP) + GAP;

    let mut canvas = Canvas::new(width.max(1), height.max(1));
    canvas.fill_rect(0, 0, width, height, GRAY);

    let peak = rows
        .iter()
        .flat_map(|r| r.bins.iter().copied())
        .fold(0.0_f64, f64::max);

    for (row_index, row) in rows.iter().enumerate() {
        let y = (GAP + row_index as u32 * (CELL_HEIGHT + GAP)) as i64;
        for (column, value) in row.bins.iter().enumerate() {
            let x = (GAP + column as u32 * (CELL_WIDTH + GAP)) as i64;
            let t = if peak > 0.0 { value / peak } else { 0.0 };
            canvas.fill_rect(x, y, CELL_WIDTH, CELL_HEIGHT, ramp_color(t));
        }
    }

    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, bins: Vec<f64>) -> HistogramRow {
        HistogramRow {
            contributor: name.to_string(),
            bins,
        }
    }

    #[test]
    fn test_heatmap_dimensions() {
        let rows = vec![row("alice", vec![0.0; 24]), row("bob", vec![0.0; 24])];
        let image = draw_heatmap(&rows);

        assert_eq!(image.width(), 24 * (CELL_WIDTH + GAP) + GAP);
        assert_eq!(image.height(), 2 * (CELL_HEIGHT + GAP) + GAP);
    }

    #[test]
    fn test_heatmap_peak_is_brightest() {
        let rows = vec![row("alice", vec![0.25, 0.75])];
        let image = draw_heatmap(&rows);

        let low = *image.get_pixel(GAP + 1, GAP + 1);
        let high = *image.get_pixel(GAP + CELL_WIDTH + GAP + 1, GAP + 1);
        assert_eq!(high, ramp_color(1.0));
        assert_eq!(low, ramp_color(0.25 / 0.75));
    }
}
