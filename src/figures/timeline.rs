//! Cumulative additions line chart

use super::canvas::{series_color, Canvas, BLACK, GRAY};
use crate::stats::CumulativeSeries;
use image::RgbImage;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 540;
const MARGIN: i64 = 40;

/// Draw each series as a polyline of cumulative count over time
///
/// The whole-playlist series is drawn in black, contributors in palette
/// order. Both axes are shared by all series.
pub fn draw_timeline(series: &[CumulativeSeries]) -> RgbImage {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    let left = MARGIN;
    let right = WIDTH as i64 - MARGIN;
    let top = MARGIN;
    let bottom = HEIGHT as i64 - MARGIN;

    canvas.draw_line((left, bottom), (right, bottom), 1, GRAY);
    canvas.draw_line((left, bottom), (left, top), 1, GRAY);

    let all_points = series.iter().flat_map(|s| s.points.iter());
    let first = all_points.clone().map(|(t, _)| t.timestamp()).min();
    let last = all_points.clone().map(|(t, _)| t.timestamp()).max();
    let peak = all_points.map(|(_, n)| *n).max().unwrap_or(0);

    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return canvas.into_image(),
    };

    let span = (last - first).max(1) as f64;
    let to_pixel = |timestamp: i64, count: usize| -> (i64, i64) {
        let x = if last == first {
            (left + right) / 2
        } else {
            left + ((timestamp - first) as f64 / span * (right - left) as f64).round() as i64
        };
        let y = bottom - (count as f64 / peak.max(1) as f64 * (bottom - top) as f64).round() as i64;
        (x, y)
    };

    let mut contributor_index = 0;
    for line in series {
        let color = match line.contributor {
            None => BLACK,
            Some(_) => {
                contributor_index += 1;
                series_color(contributor_index - 1)
            }
        };

        let mut previous = to_pixel(first, 0);
        for (time, count) in &line.points {
            let point = to_pixel(time.timestamp(), *count);
            canvas.draw_line(previous, point, 2, color);
            previous = point;
        }
    }

    canvas.into_image()
}
