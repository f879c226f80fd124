//! Report orchestration and output layout

pub mod config;
pub mod organizer;
pub mod pipeline;
pub mod writer;

pub use config::ReportConfig;
pub use organizer::OutputOrganizer;
pub use pipeline::ReportPipeline;
pub use writer::{render_report, write_report};
