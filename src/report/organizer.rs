//! Output directory layout

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Manages the files written for one report
pub struct OutputOrganizer {
    /// Root output directory
    output_dir: PathBuf,
}

impl OutputOrganizer {
    /// Create an organizer for the given output directory
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Create the output directory if needed
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {:?}", self.output_dir)
        })?;

        log::debug!("Output directory ready at {:?}", self.output_dir);
        Ok(())
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("report.txt")
    }

    /// Cumulative additions line chart
    pub fn timeline_path(&self) -> PathBuf {
        self.output_dir.join("additions_over_time.png")
    }

    /// Additions per contributor pie chart
    pub fn pie_path(&self) -> PathBuf {
        self.output_dir.join("additions_per_person.png")
    }

    /// Contributor colours and heatmap row order
    pub fn figure_key_path(&self) -> PathBuf {
        self.output_dir.join("figure_key.txt")
    }

    pub fn hour_heatmap_path(&self) -> PathBuf {
        self.output_dir.join("time_added_heatmap.png")
    }

    pub fn release_heatmap_path(&self) -> PathBuf {
        self.output_dir.join("release_year_heatmap.png")
    }

    pub fn average_cover_path(&self) -> PathBuf {
        self.output_dir.join("average_cover.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_under_output_dir() {
        let organizer = OutputOrganizer::new(PathBuf::from("/tmp/stats"));
        assert_eq!(organizer.report_path(), PathBuf::from("/tmp/stats/report.txt"));
        assert_eq!(
            organizer.average_cover_path(),
            PathBuf::from("/tmp/stats/average_cover.png")
        );
    }
}
