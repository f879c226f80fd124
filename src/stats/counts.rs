//! Frequency counts for artists and genres

use super::partition::partition_by_contributor;
use crate::model::Addition;
use std::collections::HashMap;

/// An item and how many times it was seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCount {
    pub name: String,
    pub count: usize,
}

/// Most common item for one contributor
///
/// `top` is `None` when none of the contributor's additions has a
/// non-empty entry to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorTop {
    pub contributor: String,
    pub top: Option<ItemCount>,
}

/// Top `n` artists across all additions
pub fn top_artists(additions: &[Addition], n: usize) -> Vec<ItemCount> {
    most_common(additions.iter().flat_map(|a| a.artist_names()), n)
}

/// Top `n` genres across all additions
pub fn top_genres(additions: &[Addition], n: usize) -> Vec<ItemCount> {
    most_common(additions.iter().flat_map(|a| a.genre_names()), n)
}

/// Single most common artist for each contributor
pub fn top_artists_per_person(additions: &[Addition]) -> Vec<ContributorTop> {
    top_per_person(additions, |a| a.artist_names().collect())
}

/// Single most common genre for each contributor
pub fn top_genres_per_person(additions: &[Addition]) -> Vec<ContributorTop> {
    top_per_person(additions, |a| a.genre_names().collect())
}

fn top_per_person<F>(additions: &[Addition], items: F) -> Vec<ContributorTop>
where
    F: Fn(&Addition) -> Vec<&str>,
{
    partition_by_contributor(additions)
        .into_iter()
        .map(|group| {
            let top = most_common(group.additions.iter().flat_map(|a| items(*a)), 1)
                .into_iter()
                .next();
            if top.is_none() {
                log::debug!("No entries to rank for {}", group.contributor);
            }
            ContributorTop {
                contributor: group.contributor.to_string(),
                top,
            }
        })
        .collect()
}

/// Count items and return the `n` most common
///
/// Sorted by descending count; equal counts keep first-seen order.
pub fn most_common<'a, I>(items: I, n: usize) -> Vec<ItemCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<ItemCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        match index.get(item) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(item, counts.len());
                counts.push(ItemCount {
                    name: item.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
