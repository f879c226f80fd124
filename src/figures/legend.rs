//! Text key naming the contributor behind each colour and heatmap row

use super::canvas::series_color;
use crate::model::Addition;
use crate::stats;
use anyhow::{Context, Result};
use image::Rgb;
use std::path::Path;

/// One contributor as drawn in the figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub contributor: String,
    /// Pie slice and timeline colour
    pub color: Rgb<u8>,
    pub additions: usize,
}

/// Contributors in the order every figure draws them
///
/// Entry `i` is the `i`-th pie slice clockwise from twelve o'clock, the
/// `i`-th coloured timeline and the `i`-th heatmap row from the top.
pub fn legend(additions: &[Addition]) -> Vec<LegendEntry> {
    stats::additions_per_contributor(additions)
        .into_iter()
        .enumerate()
        .map(|(i, (contributor, count))| LegendEntry {
            contributor,
            color: series_color(i),
            additions: count,
        })
        .collect()
}

/// Format the key as text, one contributor per line
pub fn format_legend(entries: &[LegendEntry]) -> String {
    let mut out = String::from("Row / colour key (black timeline is the whole playlist)\n");
    for (i, entry) in entries.iter().enumerate() {
        let Rgb([r, g, b]) = entry.color;
        out.push_str(&format!(
            "{}. {} #{:02x}{:02x}{:02x} ({} additions)\n",
            i + 1,
            entry.contributor,
            r,
            g,
            b,
            entry.additions
        ));
    }
    out
}

/// Log the key and write it to `path`
pub fn write_legend(additions: &[Addition], path: &Path) -> Result<()> {
    let text = format_legend(&legend(additions));
    for line in text.lines().skip(1) {
        log::info!("  {}", line);
    }

    std::fs::write(path, text).with_context(|| format!("Failed to write figure key: {:?}", path))?;
    log::debug!("Figure key written to: {:?}", path);
    Ok(())
}
