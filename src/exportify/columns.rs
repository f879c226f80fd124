//! Exportify CSV column schema

/// Columns read from an Exportify export, with their fixed positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// B
    TrackName,
    /// D
    Artists,
    /// I
    ReleaseDate,
    /// J
    AlbumImageUrl,
    /// O
    Explicit,
    /// P
    Popularity,
    /// Q
    AddedBy,
    /// R
    AddedAt,
    /// S
    Genres,
    /// T
    Danceability,
    /// U
    Energy,
    /// W
    Loudness,
}

impl Column {
    /// Smallest row width that contains every column we read
    pub const MIN_WIDTH: usize = 23;

    /// Zero-based position in the row
    pub fn index(&self) -> usize {
        match self {
            Column::TrackName => 1,
            Column::Artists => 3,
            Column::ReleaseDate => 8,
            Column::AlbumImageUrl => 9,
            Column::Explicit => 14,
            Column::Popularity => 15,
            Column::AddedBy => 16,
            Column::AddedAt => 17,
            Column::Genres => 18,
            Column::Danceability => 19,
            Column::Energy => 20,
            Column::Loudness => 22,
        }
    }

    /// Spreadsheet letter, for error messages
    pub fn letter(&self) -> char {
        (b'A' + self.index() as u8) as char
    }

    /// Header label used by Exportify
    pub fn label(&self) -> &'static str {
        match self {
            Column::TrackName => "Track Name",
            Column::Artists => "Artist Name(s)",
            Column::ReleaseDate => "Release Date",
            Column::AlbumImageUrl => "Album Image URL",
            Column::Explicit => "Explicit",
            Column::Popularity => "Popularity",
            Column::AddedBy => "Added By",
            Column::AddedAt => "Added At",
            Column::Genres => "Genres",
            Column::Danceability => "Danceability",
            Column::Energy => "Energy",
            Column::Loudness => "Loudness",
        }
    }
}
