//! Additions-per-contributor pie chart

use super::canvas::{series_color, Canvas};
use image::RgbImage;
use std::f64::consts::TAU;

const SIZE: u32 = 480;
const RADIUS: f64 = 200.0;

/// Draw a pie with one slice per (contributor, count), starting at twelve
/// o'clock and running clockwise in input order
pub fn draw_pie(slices: &[(String, usize)]) -> RgbImage {
    let mut canvas = Canvas::new(SIZE, SIZE);
    let total: usize = slices.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return canvas.into_image();
    }

    // Upper bound of each slice as a fraction of the full turn
    let mut bounds = Vec::with_capacity(slices.len());
    let mut acc = 0usize;
    for (_, count) in slices {
        acc += count;
        bounds.push(acc as f64 / total as f64);
    }

    let center = SIZE as f64 / 2.0;
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            if dx * dx + dy * dy > RADIUS * RADIUS {
                continue;
            }

            // Clockwise from twelve o'clock with y pointing down
            let fraction = dx.atan2(-dy).rem_euclid(TAU) / TAU;
            let slice = bounds
                .iter()
                .position(|&bound| fraction < bound)
                .unwrap_or(bounds.len() - 1);
            canvas.plot(x as i64, y as i64, series_color(slice));
        }
    }

    canvas.into_image()
}
