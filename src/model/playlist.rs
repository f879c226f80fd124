use super::Addition;
use std::collections::HashSet;

/// Ordered additions read from one playlist export
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Additions in file order
    additions: Vec<Addition>,
}

impl Playlist {
    /// Create a playlist from additions in file order
    pub fn new(additions: Vec<Addition>) -> Self {
        Self { additions }
    }

    /// All additions, in file order
    pub fn additions(&self) -> &[Addition] {
        &self.additions
    }

    /// Number of additions
    pub fn len(&self) -> usize {
        self.additions.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty()
    }

    /// Number of distinct contributors
    pub fn contributor_count(&self) -> usize {
        self.additions
            .iter()
            .map(|a| a.contributor.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// A playlist is collaborative when more than one person added to it
    pub fn is_collaborative(&self) -> bool {
        self.contributor_count() > 1
    }
}
