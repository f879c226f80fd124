//! Conversion of one Exportify CSV row into an [`Addition`]

use super::date::parse_date;
use super::{Column, ParseError};
use crate::model::{Addition, ContributorConfig};
use chrono_tz::Tz;
use csv::StringRecord;

/// Build an addition from a CSV row
///
/// The contributor id is resolved through `config`; the added-at timestamp
/// is expressed in that contributor's timezone, the release date in UTC.
pub fn extract_addition(
    record: &StringRecord,
    config: &ContributorConfig,
) -> Result<Addition, ParseError> {
    if record.len() < Column::MIN_WIDTH {
        // Report the first column we need that the row lacks
        let column = [
            Column::TrackName,
            Column::Artists,
            Column::ReleaseDate,
            Column::AlbumImageUrl,
            Column::Explicit,
            Column::Popularity,
            Column::AddedBy,
            Column::AddedAt,
            Column::Genres,
            Column::Danceability,
            Column::Energy,
            Column::Loudness,
        ]
        .into_iter()
        .find(|c| c.index() >= record.len())
        .unwrap_or(Column::Loudness);

        return Err(ParseError::MissingColumn {
            column,
            width: record.len(),
            expected: Column::MIN_WIDTH,
        });
    }

    let contributor = config.resolve(field(record, Column::AddedBy));
    let cover_url = field(record, Column::AlbumImageUrl);

    Ok(Addition {
        name: field(record, Column::TrackName).to_string(),
        artists: split_escaped(field(record, Column::Artists)),
        time_added: parse_date(field(record, Column::AddedAt), contributor.timezone)?,
        contributor: contributor.name,
        time_released: parse_date(field(record, Column::ReleaseDate), Tz::UTC)?,
        genres: split_escaped(field(record, Column::Genres)),
        popularity: number(record, Column::Popularity)?,
        danceability: number(record, Column::Danceability)?,
        loudness: number(record, Column::Loudness)?,
        energy: number(record, Column::Energy)?,
        explicit: field(record, Column::Explicit) == "true",
        album_cover_url: if cover_url.is_empty() {
            None
        } else {
            Some(cover_url.to_string())
        },
    })
}

/// Split a list cell on commas not preceded by a backslash
///
/// `\,` is kept as a literal comma inside the element. Empty tokens are
/// preserved.
pub fn split_escaped(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    items.push(current);

    items
}

fn field(record: &StringRecord, column: Column) -> &str {
    record.get(column.index()).unwrap_or_default()
}

fn number(record: &StringRecord, column: Column) -> Result<f64, ParseError> {
    let value = field(record, column);
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}
