//! Data model for playlist exports
//!
//! This module defines the records produced from an Exportify CSV,
//! the contributor configuration used to build them, and the metric
//! table used by the aggregation layer.

pub(crate) mod addition;
mod contributor;
mod metric;
mod playlist;

pub use addition::Addition;
pub use contributor::{Contributor, ContributorConfig, DEFAULT_TIMEZONE};
pub use metric::{format_float, format_rounded, Metric};
pub use playlist::Playlist;
