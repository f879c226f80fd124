//! Playlist statistics
//!
//! Pure read-only views over a slice of additions: frequency counts,
//! metric averages and extremes, per-contributor histograms and
//! addition timelines. Nothing here mutates its input.

mod counts;
mod histogram;
mod metrics;
mod partition;
mod timeline;

pub use counts::{
    most_common, top_artists, top_artists_per_person, top_genres, top_genres_per_person,
    ContributorTop, ItemCount,
};
pub use histogram::{hour_histogram, release_year_histogram, HistogramRow, ReleaseYearHistogram};
pub use metrics::{average_metric, average_metric_per_person, extremal, ContributorAverage};
pub use partition::{partition_by_contributor, Contributions};
pub use timeline::{additions_per_contributor, cumulative_additions, CumulativeSeries};

use thiserror::Error;

/// Statistic that cannot be computed from the given additions
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("no additions to compute statistics from")]
    EmptyPopulation,
}
