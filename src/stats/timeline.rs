//! Addition counts over time and per contributor

use super::partition::partition_by_contributor;
use crate::model::Addition;
use chrono::{DateTime, Utc};

/// Cumulative additions for one series, chronologically sorted
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeSeries {
    /// Contributor name, or None for the whole playlist
    pub contributor: Option<String>,
    /// (instant, additions so far including this one)
    pub points: Vec<(DateTime<Utc>, usize)>,
}

/// Number of additions made by each contributor, in first-appearance order
pub fn additions_per_contributor(additions: &[Addition]) -> Vec<(String, usize)> {
    partition_by_contributor(additions)
        .into_iter()
        .map(|group| (group.contributor.to_string(), group.additions.len()))
        .collect()
}

/// Cumulative additions for the whole playlist followed by one series per contributor
pub fn cumulative_additions(additions: &[Addition]) -> Vec<CumulativeSeries> {
    let mut series = vec![CumulativeSeries {
        contributor: None,
        points: cumulate(additions.iter()),
    }];

    series.extend(
        partition_by_contributor(additions)
            .into_iter()
            .map(|group| CumulativeSeries {
                contributor: Some(group.contributor.to_string()),
                points: cumulate(group.additions.into_iter()),
            }),
    );

    series
}

fn cumulate<'a, I>(additions: I) -> Vec<(DateTime<Utc>, usize)>
where
    I: Iterator<Item = &'a Addition>,
{
    let mut times: Vec<DateTime<Utc>> = additions.map(|a| a.time_added.with_timezone(&Utc)).collect();
    times.sort();
    times.into_iter().zip(1..).collect()
}
