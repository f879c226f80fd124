//! Playlist Stats - statistics for Spotify playlists exported with Exportify
//!
//! This library reads Exportify CSV exports, normalizes each row into an
//! addition with per-contributor timezones, and produces a text report,
//! figures and an optional averaged album cover.

pub mod artwork;
pub mod exportify;
pub mod figures;
pub mod model;
pub mod report;
pub mod stats;

pub use report::config::ReportConfig;
pub use report::pipeline::ReportPipeline;
