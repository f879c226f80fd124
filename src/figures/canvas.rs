//! Minimal raster drawing on top of `image::RgbImage`

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const GRAY: Rgb<u8> = Rgb([160, 160, 160]);

/// Series colours, cycled per contributor
const PALETTE: [Rgb<u8>; 10] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([140, 86, 75]),
    Rgb([227, 119, 194]),
    Rgb([127, 127, 127]),
    Rgb([188, 189, 34]),
    Rgb([23, 190, 207]),
];

/// Stops of a dark-purple → teal → yellow ramp, low to high
const RAMP: [[f64; 3]; 5] = [
    [68.0, 1.0, 84.0],
    [59.0, 82.0, 139.0],
    [33.0, 145.0, 140.0],
    [94.0, 201.0, 98.0],
    [253.0, 231.0, 37.0],
];

/// Colour for the `index`-th series
pub fn series_color(index: usize) -> Rgb<u8> {
    PALETTE[index % PALETTE.len()]
}

/// Map `t` in [0, 1] onto the heat ramp (values outside are clamped)
pub fn ramp_color(t: f64) -> Rgb<u8> {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (RAMP.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(RAMP.len() - 2);
    let frac = scaled - lower as f64;

    let mut rgb = [0u8; 3];
    for (c, channel) in rgb.iter_mut().enumerate() {
        let value = RAMP[lower][c] + (RAMP[lower + 1][c] - RAMP[lower][c]) * frac;
        *channel = value.round() as u8;
    }
    Rgb(rgb)
}

/// White canvas with clipped drawing primitives
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Set one pixel, ignoring coordinates outside the canvas
    pub fn plot(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fill the rectangle with top-left corner (x, y)
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgb<u8>) {
        for dy in 0..height as i64 {
            for dx in 0..width as i64 {
                self.plot(x + dx, y + dy, color);
            }
        }
    }

    /// Bresenham line, `thickness` pixels wide
    pub fn draw_line(
        &mut self,
        from: (i64, i64),
        to: (i64, i64),
        thickness: u32,
        color: Rgb<u8>,
    ) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        let offset = thickness as i64 / 2;

        loop {
            self.fill_rect(x - offset, y - offset, thickness, thickness, color);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Save an image as PNG
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write figure: {}", path.display()))?;

    log::info!("Figure written to: {}", path.display());
    Ok(())
}
