use anyhow::Result;
use clap::Parser;
use playlist_stats::artwork::HttpImageSource;
use playlist_stats::model::ContributorConfig;
use playlist_stats::report::config::DEFAULT_TOP_K;
use playlist_stats::{ReportConfig, ReportPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-stats")]
#[command(about = "Generate statistics for a Spotify playlist exported with Exportify", long_about = None)]
struct Args {
    /// Path to the Exportify CSV export
    input: String,

    /// Directory to write the report and figures to
    output: String,

    /// Contributor config (JSON mapping Spotify id to name and timezone)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Number of top artists/genres to list
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Download and average every album cover (slow)
    #[arg(long)]
    average_cover: bool,

    /// Skip drawing figures
    #[arg(long)]
    no_figures: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    log::info!("Playlist Stats");
    log::info!("==============");

    // Expand ~ in paths
    let input = PathBuf::from(shellexpand::tilde(&args.input).as_ref());
    let output = PathBuf::from(shellexpand::tilde(&args.output).as_ref());

    let contributors = match &args.config {
        Some(path) => ContributorConfig::load(&PathBuf::from(shellexpand::tilde(path).as_ref()))?,
        None => {
            log::info!("No contributor config given, using Spotify ids and US/Eastern");
            ContributorConfig::new()
        }
    };

    log::info!("Loading playlist export...");
    let playlist = playlist_stats::exportify::read_playlist(&input, &contributors)?;

    log::info!(
        "Playlist loaded: {} additions, {} contributor(s)",
        playlist.len(),
        playlist.contributor_count()
    );

    let config = ReportConfig::new(output.clone())
        .with_top_k(args.top_k)
        .with_figures(!args.no_figures)
        .with_average_cover(args.average_cover);

    if args.average_cover {
        log::info!("Average cover enabled - every album cover will be downloaded");
    }

    let pipeline = ReportPipeline::new(config, HttpImageSource::new());
    pipeline.run(&playlist)?;

    log::info!("Results ready at: {:?}", output);
    Ok(())
}
