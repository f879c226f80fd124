use chrono::Timelike;
use playlist_stats::artwork::ImageSource;
use playlist_stats::exportify::{read_playlist, Column};
use playlist_stats::model::{ContributorConfig, Playlist, DEFAULT_TIMEZONE};
use playlist_stats::report::render_report;
use playlist_stats::{ReportConfig, ReportPipeline};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "Track URI,Track Name,Artist URI(s),Artist Name(s),Album URI,Album Name,\
Album Artist URI(s),Album Artist Name(s),Album Release Date,Album Image URL,Disc Number,\
Track Number,Track Duration (ms),Track Preview URL,Explicit,Popularity,Added By,Added At,\
Genres,Danceability,Energy,Key,Loudness,Mode,Speechiness,Acousticness,Instrumentalness,\
Liveness,Valence,Tempo,Time Signature";

/// Fields of one test row
struct Row<'a> {
    name: &'a str,
    artists: &'a str,
    released: &'a str,
    added_by: &'a str,
    added_at: &'a str,
    genres: &'a str,
    popularity: &'a str,
}

impl Row<'_> {
    fn line(&self) -> String {
        let mut fields = vec![String::new(); 31];
        let mut set = |column: Column, value: &str| fields[column.index()] = value.to_string();

        set(Column::TrackName, self.name);
        set(Column::Artists, self.artists);
        set(Column::ReleaseDate, self.released);
        set(Column::AlbumImageUrl, "https://i.scdn.co/image/test");
        set(Column::Explicit, "false");
        set(Column::Popularity, self.popularity);
        set(Column::AddedBy, self.added_by);
        set(Column::AddedAt, self.added_at);
        set(Column::Genres, self.genres);
        set(Column::Danceability, "0.6");
        set(Column::Energy, "0.7");
        set(Column::Loudness, "-5.5");

        fields
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Three additions by one (unmapped) contributor
fn solo_rows() -> Vec<Row<'static>> {
    vec![
        Row {
            name: "Song One",
            artists: "Band A,Band B",
            released: "2019-05-03",
            added_by: "spotify_user",
            added_at: "2021-06-01T16:00:00Z",
            genres: "indie rock,dream pop",
            popularity: "40",
        },
        Row {
            name: "Song Two",
            artists: "Band A",
            released: "2015",
            added_by: "spotify_user",
            added_at: "2021-06-02T03:30:00Z",
            genres: "indie rock",
            popularity: "60",
        },
        Row {
            name: "Song Three",
            artists: "Band C\\, The Sequel",
            released: "2020-11",
            added_by: "spotify_user",
            added_at: "2021-06-03T12:00:00Z",
            genres: "",
            popularity: "80",
        },
    ]
}

fn write_csv(dir: &Path, rows: &[Row]) -> PathBuf {
    let path = dir.join("playlist.csv");
    let mut text = format!("{}\n", HEADER);
    for row in rows {
        text.push_str(&row.line());
        text.push('\n');
    }
    fs::write(&path, text).expect("Failed to write CSV");
    path
}

/// Never called unless the average cover is enabled
struct NoCovers;

impl ImageSource for NoCovers {
    fn fetch_all(&self, _urls: &[String]) -> anyhow::Result<Vec<Vec<u8>>> {
        anyhow::bail!("network disabled in tests")
    }
}

#[test]
fn test_read_solo_playlist() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv = write_csv(temp_dir.path(), &solo_rows());

    let playlist = read_playlist(&csv, &ContributorConfig::new()).unwrap();

    assert_eq!(playlist.len(), 3);
    assert!(!playlist.is_collaborative());

    let third = &playlist.additions()[2];
    assert_eq!(third.artists, vec!["Band C, The Sequel"]);
    assert_eq!(third.genres, vec![""]);
}

#[test]
fn test_unmapped_contributor_defaults_to_eastern() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv = write_csv(temp_dir.path(), &solo_rows());

    let playlist = read_playlist(&csv, &ContributorConfig::new()).unwrap();
    let first = &playlist.additions()[0];

    assert_eq!(first.contributor, "spotify_user");
    assert_eq!(first.time_added.timezone(), DEFAULT_TIMEZONE);
    // 16:00 UTC on June 1st is 12:00 EDT
    assert_eq!(first.time_added.hour(), 12);
    // 03:30 UTC on June 2nd is 23:30 EDT the day before
    assert_eq!(playlist.additions()[1].time_added.hour(), 23);
}

#[test]
fn test_report_matches_hand_computed_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv = write_csv(temp_dir.path(), &solo_rows());
    let playlist = read_playlist(&csv, &ContributorConfig::new()).unwrap();

    let report = render_report(playlist.additions(), 1, false).unwrap();

    assert!(report.contains("Top 1 artists:\nBand A: 2\n\n"));
    assert!(report.contains("Top 1 genres:\nindie rock: 2\n\n"));
    assert!(report.contains("popularity: 60.0\n"));
    assert!(report.contains("explicit: 0.0\n"));
    assert!(report.contains("Highest popularity: Song Three, 80.0\n"));
    assert!(report.contains("Lowest time_released: Song Two, 2015-01-01 00:00:00+00:00\n"));
}

#[test]
fn test_config_maps_contributors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut rows = solo_rows();
    rows[2].added_by = "other_user";
    let csv = write_csv(temp_dir.path(), &rows);

    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{
            "spotify_user": { "name": "Alice", "timezone": "Europe/Berlin" },
            "other_user": { "name": "Bob", "timezone": "UTC" }
        }"#,
    )
    .unwrap();

    let config = ContributorConfig::load(&config_path).unwrap();
    let playlist = read_playlist(&csv, &config).unwrap();

    assert!(playlist.is_collaborative());
    assert_eq!(playlist.additions()[0].contributor, "Alice");
    // 16:00 UTC is 18:00 CEST
    assert_eq!(playlist.additions()[0].time_added.hour(), 18);
    assert_eq!(playlist.additions()[2].contributor, "Bob");
    assert_eq!(playlist.additions()[2].time_added.hour(), 12);

    let report = render_report(playlist.additions(), 5, true).unwrap();
    assert!(report.contains("Statistics Per Person"));
    assert!(report.contains("popularity:\nAlice: 50.0\nBob: 80.0\n"));
    assert!(report.contains("Highest popularity: Song Three, 80.0, Bob\n"));
}

#[test]
fn test_malformed_row_aborts() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut rows = solo_rows();
    rows[1].popularity = "popular";
    let csv = write_csv(temp_dir.path(), &rows);

    assert!(read_playlist(&csv, &ContributorConfig::new()).is_err());
}

#[test]
fn test_pipeline_writes_outputs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv = write_csv(temp_dir.path(), &solo_rows());
    let playlist = read_playlist(&csv, &ContributorConfig::new()).unwrap();

    let output = temp_dir.path().join("results");
    let pipeline = ReportPipeline::new(ReportConfig::new(output.clone()), NoCovers);
    pipeline.run(&playlist).expect("Report failed");

    let report = fs::read_to_string(output.join("report.txt")).unwrap();
    assert!(report.starts_with("##############################\nPlaylist Statistics\n"));

    for figure in [
        "additions_over_time.png",
        "additions_per_person.png",
        "time_added_heatmap.png",
        "release_year_heatmap.png",
    ] {
        let path = output.join(figure);
        assert!(path.exists(), "missing {}", figure);
        let img = image::open(&path).expect("figure should be a readable PNG");
        assert!(img.width() > 0);
    }
    assert!(!output.join("average_cover.png").exists());

    let key = fs::read_to_string(output.join("figure_key.txt")).unwrap();
    assert!(key.contains("1. spotify_user #1f77b4 (3 additions)\n"));
}

#[test]
fn test_pipeline_average_cover_failure_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv = write_csv(temp_dir.path(), &solo_rows());
    let playlist = read_playlist(&csv, &ContributorConfig::new()).unwrap();

    let config = ReportConfig::new(temp_dir.path().join("results"))
        .with_figures(false)
        .with_average_cover(true);
    let pipeline = ReportPipeline::new(config, NoCovers);

    assert!(pipeline.run(&playlist).is_err());
}

#[test]
fn test_empty_playlist_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pipeline = ReportPipeline::new(ReportConfig::new(temp_dir.path().to_path_buf()), NoCovers);

    assert!(pipeline.run(&Playlist::default()).is_err());
}
