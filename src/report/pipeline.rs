//! Main report pipeline orchestration

use super::config::ReportConfig;
use super::organizer::OutputOrganizer;
use super::writer::write_report;
use crate::artwork::{average_album_cover, ImageSource};
use crate::figures;
use crate::model::Playlist;
use anyhow::{Context, Result};

/// Main report pipeline
pub struct ReportPipeline<S: ImageSource> {
    config: ReportConfig,
    organizer: OutputOrganizer,
    covers: S,
}

impl<S: ImageSource> ReportPipeline<S> {
    /// Create a new report pipeline
    pub fn new(config: ReportConfig, covers: S) -> Self {
        let organizer = OutputOrganizer::new(config.output_dir.clone());

        Self {
            config,
            organizer,
            covers,
        }
    }

    /// Run the complete report process
    pub fn run(&self, playlist: &Playlist) -> Result<()> {
        if playlist.is_empty() {
            anyhow::bail!("Playlist has no additions to report on");
        }

        let collaborative = self
            .config
            .collaborative
            .unwrap_or_else(|| playlist.is_collaborative());

        log::info!(
            "Generating report for {} additions from {} contributor(s){}",
            playlist.len(),
            playlist.contributor_count(),
            if collaborative { " (collaborative)" } else { "" }
        );

        // Step 1: Output directory
        self.organizer.init()?;

        // Step 2: Text report
        write_report(
            &self.organizer.report_path(),
            playlist.additions(),
            self.config.top_k,
            collaborative,
        )?;

        // Step 3: Figures
        if self.config.figures {
            self.write_figures(playlist)?;
        } else {
            log::info!("Skipping figures");
        }

        // Step 4: Average cover
        if self.config.average_cover {
            let cover = average_album_cover(playlist.additions(), &self.covers)
                .context("Failed to compute average album cover")?;
            cover.save(&self.organizer.average_cover_path())?;
        }

        log::info!("Report complete!");
        Ok(())
    }

    fn write_figures(&self, playlist: &Playlist) -> Result<()> {
        log::info!("Drawing figures...");
        let additions = playlist.additions();

        figures::render_timeline(additions, &self.organizer.timeline_path())?;
        figures::render_pie(additions, &self.organizer.pie_path())?;
        figures::render_hour_heatmap(additions, &self.organizer.hour_heatmap_path())?;
        figures::render_release_heatmap(additions, &self.organizer.release_heatmap_path())?;

        log::info!("Figure key:");
        figures::write_legend(additions, &self.organizer.figure_key_path())?;

        Ok(())
    }
}
