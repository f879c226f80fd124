//! Per-contributor normalized histograms

use super::partition::partition_by_contributor;
use crate::model::Addition;
use chrono::{Datelike, Timelike};

/// One contributor's row of a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramRow {
    pub contributor: String,
    /// Fraction of the contributor's additions in each bin; sums to 1
    pub bins: Vec<f64>,
}

/// Release-year distribution with bins shared by every contributor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseYearHistogram {
    /// Bin labels, global min year to global max year inclusive
    pub years: Vec<i32>,
    pub rows: Vec<HistogramRow>,
}

/// Distribution of added-at hour (local to each contributor), 24 bins
///
/// No additions means no rows.
pub fn hour_histogram(additions: &[Addition]) -> Vec<HistogramRow> {
    partition_by_contributor(additions)
        .into_iter()
        .map(|group| {
            let mut counts = vec![0usize; 24];
            for addition in &group.additions {
                counts[addition.time_added.hour() as usize % 24] += 1;
            }
            HistogramRow {
                contributor: group.contributor.to_string(),
                bins: normalize(&counts),
            }
        })
        .collect()
}

/// Distribution of release years over the full observed year range
///
/// No additions means no years and no rows.
pub fn release_year_histogram(additions: &[Addition]) -> ReleaseYearHistogram {
    let years = additions.iter().map(|a| a.time_released.year());
    let (first, last) = match (years.clone().min(), years.max()) {
        (Some(first), Some(last)) => (first, last),
        _ => return ReleaseYearHistogram::default(),
    };

    let rows = partition_by_contributor(additions)
        .into_iter()
        .map(|group| {
            let mut counts = vec![0usize; (last - first + 1) as usize];
            for addition in &group.additions {
                counts[(addition.time_released.year() - first) as usize] += 1;
            }
            HistogramRow {
                contributor: group.contributor.to_string(),
                bins: normalize(&counts),
            }
        })
        .collect();

    ReleaseYearHistogram {
        years: (first..=last).collect(),
        rows,
    }
}

fn normalize(counts: &[usize]) -> Vec<f64> {
    let total: usize = counts.iter().sum();
    counts
        .iter()
        .map(|&c| c as f64 / total as f64)
        .collect()
}
