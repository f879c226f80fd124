//! PNG figures for a playlist report
//!
//! Figures are drawn directly with the `image` crate: a cumulative
//! additions chart, a per-contributor pie chart, and hour-of-day and
//! release-year heatmaps (one row per contributor). A text key maps
//! colours and rows back to contributors.

mod canvas;
mod heatmap;
mod legend;
mod pie;
mod timeline;

pub use canvas::{ramp_color, save_png, series_color, Canvas};
pub use heatmap::draw_heatmap;
pub use legend::{format_legend, legend, write_legend, LegendEntry};
pub use pie::draw_pie;
pub use timeline::draw_timeline;

use crate::model::Addition;
use crate::stats;
use anyhow::Result;
use std::path::Path;

/// Cumulative additions over time, total and per contributor
pub fn render_timeline(additions: &[Addition], path: &Path) -> Result<()> {
    save_png(&draw_timeline(&stats::cumulative_additions(additions)), path)
}

/// Share of additions made by each contributor
pub fn render_pie(additions: &[Addition], path: &Path) -> Result<()> {
    save_png(&draw_pie(&stats::additions_per_contributor(additions)), path)
}

/// Hour-of-day heatmap, 24 columns
pub fn render_hour_heatmap(additions: &[Addition], path: &Path) -> Result<()> {
    let rows = stats::hour_histogram(additions);
    save_png(&draw_heatmap(&rows), path)
}

/// Release-year heatmap, one column per year in the observed range
pub fn render_release_heatmap(additions: &[Addition], path: &Path) -> Result<()> {
    let histogram = stats::release_year_histogram(additions);
    log::debug!(
        "Release years {:?}..={:?}",
        histogram.years.first(),
        histogram.years.last()
    );
    save_png(&draw_heatmap(&histogram.rows), path)
}
