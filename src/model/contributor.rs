use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Timezone used for contributors missing from the config
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::US::Eastern;

/// Display name and timezone for one contributor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub timezone: Tz,
}

impl Contributor {
    /// Fallback entry: raw id as the name, default timezone
    pub fn fallback(id: &str) -> Self {
        Self {
            name: id.to_string(),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

/// Mapping from Spotify user id to contributor details
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ContributorConfig {
    entries: HashMap<String, Contributor>,
}

impl ContributorConfig {
    /// Empty config: every contributor resolves to its fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config of the form `{ "<id>": { "name": ..., "timezone": ... } }`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read contributor config: {:?}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid contributor config: {:?}", path))?;

        log::info!("Loaded {} contributor(s) from {:?}", config.len(), path);
        Ok(config)
    }

    /// Parse a JSON config from a string
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Add or replace an entry
    pub fn insert(&mut self, id: impl Into<String>, contributor: Contributor) {
        self.entries.insert(id.into(), contributor);
    }

    /// Resolve a raw id, falling back when it is unmapped
    pub fn resolve(&self, id: &str) -> Contributor {
        self.entries
            .get(id)
            .cloned()
            .unwrap_or_else(|| Contributor::fallback(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
