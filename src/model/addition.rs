use chrono::DateTime;
use chrono_tz::Tz;

/// One playlist entry as exported by Exportify
#[derive(Debug, Clone, PartialEq)]
pub struct Addition {
    /// Track name
    pub name: String,

    /// Artist names (ordered, may contain empty placeholders)
    pub artists: Vec<String>,

    /// Display name of the contributor who added the track
    pub contributor: String,

    /// When the track was added, in the contributor's timezone
    pub time_added: DateTime<Tz>,

    /// Album release date, always UTC
    pub time_released: DateTime<Tz>,

    /// Genre names (ordered, may contain empty placeholders)
    pub genres: Vec<String>,

    /// Spotify popularity (0-100)
    pub popularity: f64,

    pub danceability: f64,

    /// Loudness in dB (typically negative)
    pub loudness: f64,

    pub energy: f64,

    pub explicit: bool,

    /// Album cover URL (None when the export left it blank)
    pub album_cover_url: Option<String>,
}

impl Addition {
    /// Non-empty artist names
    pub fn artist_names(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(String::as_str).filter(|a| !a.is_empty())
    }

    /// Non-empty genre names
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(String::as_str).filter(|g| !g.is_empty())
    }
}
