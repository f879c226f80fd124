//! Averages and extremes of per-song metrics

use super::partition::partition_by_contributor;
use super::StatsError;
use crate::model::{Addition, Metric};

/// Mean of a metric for one contributor
#[derive(Debug, Clone, PartialEq)]
pub struct ContributorAverage {
    pub contributor: String,
    pub value: f64,
}

/// Arithmetic mean of `metric` over all additions
pub fn average_metric(additions: &[Addition], metric: Metric) -> Result<f64, StatsError> {
    mean(additions.iter(), metric)
}

/// Arithmetic mean of `metric` for each contributor, in first-appearance order
pub fn average_metric_per_person(
    additions: &[Addition],
    metric: Metric,
) -> Result<Vec<ContributorAverage>, StatsError> {
    if additions.is_empty() {
        return Err(StatsError::EmptyPopulation);
    }

    partition_by_contributor(additions)
        .into_iter()
        .map(|group| {
            Ok(ContributorAverage {
                contributor: group.contributor.to_string(),
                value: mean(group.additions.iter().copied(), metric)?,
            })
        })
        .collect()
}

/// Addition with the highest (or, with `lowest`, the lowest) value of `metric`
///
/// On ties the first addition in file order wins.
pub fn extremal(
    additions: &[Addition],
    metric: Metric,
    lowest: bool,
) -> Result<&Addition, StatsError> {
    let mut iter = additions.iter();
    let mut best = iter.next().ok_or(StatsError::EmptyPopulation)?;
    let mut best_value = metric.value(best);

    for addition in iter {
        let value = metric.value(addition);
        let better = if lowest {
            value < best_value
        } else {
            value > best_value
        };
        if better {
            best = addition;
            best_value = value;
        }
    }

    Ok(best)
}

fn mean<'a, I>(additions: I, metric: Metric) -> Result<f64, StatsError>
where
    I: Iterator<Item = &'a Addition>,
{
    let (sum, count) = additions.fold((0.0, 0usize), |(sum, count), a| {
        (sum + metric.value(a), count + 1)
    });

    if count == 0 {
        return Err(StatsError::EmptyPopulation);
    }
    Ok(sum / count as f64)
}
