//! Average album cover
//!
//! Downloads every album cover in the playlist, resizes each to Spotify's
//! standard cover size and averages them pixelwise.

use crate::model::Addition;
use anyhow::{Context, Result};
use futures::future::try_join_all;
use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use rayon::prelude::*;
use std::path::Path;

/// Standard Spotify album cover size (square)
pub const STANDARD_COVER_SIZE: u32 = 640;

/// Source of raw image bytes, one entry per URL in request order
///
/// Allows swapping the HTTP fetcher for an in-memory source in tests.
pub trait ImageSource {
    /// Fetch every URL; any single failure fails the whole batch
    fn fetch_all(&self, urls: &[String]) -> Result<Vec<Vec<u8>>>;
}

/// Fetches covers over HTTP, all requests in flight at once
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_batch(&self, urls: &[String]) -> Result<Vec<Vec<u8>>> {
        try_join_all(urls.iter().map(|url| self.fetch_one(url))).await
    }

    async fn fetch_one(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request cover: {}", url))?
            .error_for_status()
            .with_context(|| format!("Cover request failed: {}", url))?;

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to download cover: {}", url))?;

        log::debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

impl Default for HttpImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for HttpImageSource {
    fn fetch_all(&self, urls: &[String]) -> Result<Vec<Vec<u8>>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        runtime.block_on(self.fetch_batch(urls))
    }
}

/// Pixelwise mean of a set of covers, channels in [0, 1]
#[derive(Debug, Clone)]
pub struct AverageCover {
    width: u32,
    height: u32,
    /// Row-major RGB
    pixels: Vec<[f32; 3]>,
}

impl AverageCover {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Normalized RGB at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Scale back to 8-bit RGB
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b] = self.pixel(x, y);
            Rgb([to_u8(r), to_u8(g), to_u8(b)])
        })
    }

    /// Write the cover as PNG
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write average cover: {}", path.display()))?;

        log::info!("Average cover written to: {}", path.display());
        Ok(())
    }
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Fetch, decode and average the cover of every addition that has one
pub fn average_album_cover<S: ImageSource>(
    additions: &[Addition],
    source: &S,
) -> Result<AverageCover> {
    let urls: Vec<String> = additions
        .iter()
        .filter_map(|a| a.album_cover_url.clone())
        .collect();

    if urls.is_empty() {
        anyhow::bail!("No album cover URLs to average");
    }

    log::info!("Fetching {} album cover(s)...", urls.len());
    let data = source.fetch_all(&urls)?;
    if data.len() != urls.len() {
        anyhow::bail!(
            "Image source returned {} image(s) for {} URL(s)",
            data.len(),
            urls.len()
        );
    }

    log::info!("Decoding {} album cover(s)...", data.len());
    let covers = data
        .par_iter()
        .zip(urls.par_iter())
        .map(|(bytes, url)| {
            decode_cover(bytes).with_context(|| format!("Failed to decode cover: {}", url))
        })
        .collect::<Result<Vec<_>>>()?;

    average_images(&covers)
}

/// Decode a cover, resizing it to the standard size when it differs
pub fn decode_cover(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).context("Failed to decode cover image")?;

    if img.width() == STANDARD_COVER_SIZE && img.height() == STANDARD_COVER_SIZE {
        return Ok(img.to_rgb8());
    }

    log::debug!(
        "Resizing cover from {}x{} to {}x{}",
        img.width(),
        img.height(),
        STANDARD_COVER_SIZE,
        STANDARD_COVER_SIZE
    );
    Ok(img
        .resize_exact(STANDARD_COVER_SIZE, STANDARD_COVER_SIZE, FilterType::Triangle)
        .to_rgb8())
}

/// Pixelwise mean of same-sized images, normalized to [0, 1]
pub fn average_images(images: &[RgbImage]) -> Result<AverageCover> {
    let first = images.first().context("No images to average")?;
    let (width, height) = first.dimensions();

    if let Some(other) = images.iter().find(|img| img.dimensions() != (width, height)) {
        anyhow::bail!(
            "Image size mismatch: {:?} vs {:?}",
            other.dimensions(),
            (width, height)
        );
    }

    let mut sums = vec![[0.0f64; 3]; (width * height) as usize];
    for img in images {
        for (sum, pixel) in sums.iter_mut().zip(img.pixels()) {
            for c in 0..3 {
                sum[c] += pixel[c] as f64;
            }
        }
    }

    let scale = images.len() as f64 * 255.0;
    let pixels = sums
        .into_iter()
        .map(|[r, g, b]| [(r / scale) as f32, (g / scale) as f32, (b / scale) as f32])
        .collect();

    Ok(AverageCover {
        width,
        height,
        pixels,
    })
}
