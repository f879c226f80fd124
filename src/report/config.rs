//! Report configuration

use std::path::PathBuf;

/// Number of artists and genres listed by default
pub const DEFAULT_TOP_K: usize = 5;

/// Configuration for one report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory receiving the report and figures
    pub output_dir: PathBuf,

    /// How many artists/genres to list
    pub top_k: usize,

    /// Force the collaborative sections on or off (None = detect)
    pub collaborative: Option<bool>,

    /// Whether to draw the PNG figures
    pub figures: bool,

    /// Whether to download every album cover and average them (slow)
    pub average_cover: bool,
}

impl ReportConfig {
    /// Create a new report configuration
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            top_k: DEFAULT_TOP_K,
            collaborative: None,
            figures: true,
            average_cover: false,
        }
    }

    /// Set how many artists/genres to list
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Force collaborative mode
    pub fn with_collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    /// Enable or disable figures
    pub fn with_figures(mut self, enable: bool) -> Self {
        self.figures = enable;
        self
    }

    /// Enable or disable the average album cover
    pub fn with_average_cover(mut self, enable: bool) -> Self {
        self.average_cover = enable;
        self
    }
}
