//! Exportify CSV file reader

use super::row::extract_addition;
use crate::model::{Addition, ContributorConfig, Playlist};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read an Exportify CSV and return its additions in file order
///
/// The first line is the header and is skipped. Any malformed row aborts
/// the read.
pub fn read_playlist(path: &Path, config: &ContributorConfig) -> Result<Playlist> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open Exportify export: {:?}", path))?;

    let additions = read_additions(file, config)
        .with_context(|| format!("Failed to read Exportify export: {:?}", path))?;

    log::info!("Parsed {} additions from {:?}", additions.len(), path);
    Ok(Playlist::new(additions))
}

/// Read additions from any CSV source (header line first)
pub fn read_additions<R: Read>(source: R, config: &ContributorConfig) -> Result<Vec<Addition>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut additions = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.with_context(|| format!("Malformed CSV at data row {}", row))?;
        let addition = extract_addition(&record, config)
            .with_context(|| format!("Invalid data row {}", row))?;

        log::debug!("Row {}: {} ({})", row, addition.name, addition.contributor);
        additions.push(addition);
    }

    Ok(additions)
}
