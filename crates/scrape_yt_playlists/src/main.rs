mod config;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use playlist_core::{
    export_playlist, ClientOptions, ExportOptions, PageFailurePolicy, YouTubeClient,
    MAX_REQUEST_ITEMS,
};
use tracing::{error, info};

use config::load_targets;

#[derive(Parser, Debug)]
#[command(author, version, about = "Export YouTube playlist metadata to CSV", long_about = None)]
struct Cli {
    /// JSON file mapping playlist names to playlist ids, playlist URLs or
    /// local .csv membership files
    #[arg(long = "targets", default_value = "target.json")]
    targets: PathBuf,

    /// Directory for the exported CSV files
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// API key for the YouTube Data API
    #[arg(long = "api-key", env = "YOUTUBE_API_KEY")]
    api_key: String,

    /// Page size for playlist listing requests
    #[arg(long = "page-size", default_value_t = MAX_REQUEST_ITEMS)]
    page_size: u32,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 10)]
    timeout: u64,

    /// Consecutive failures tolerated for one playlist page before giving up
    #[arg(long = "max-page-failures", default_value_t = 3)]
    max_page_failures: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if cli.page_size == 0 {
        bail!("page-size must be greater than 0");
    }

    info!("starting playlist export run");
    let run_started = Instant::now();

    let client = YouTubeClient::new(ClientOptions {
        timeout: Duration::from_secs(cli.timeout),
        api_key: cli.api_key.clone(),
        ..Default::default()
    })
    .context("failed to build API client")?;

    let targets = load_targets(&cli.targets)?;
    if targets.is_empty() {
        bail!("target file contains no playlists: {}", cli.targets.display());
    }

    // One independent task per playlist; nothing is shared after spawn
    // beyond each task's own clone of the client.
    let fetch_started = Instant::now();
    let mut workers = Vec::new();
    for (playlist_name, target) in targets {
        let client = client.clone();
        let options = ExportOptions {
            playlist_name: playlist_name.clone(),
            target,
            output_dir: cli.output_dir.clone(),
            page_size: cli.page_size,
            max_request_items: MAX_REQUEST_ITEMS as usize,
            page_failure_policy: PageFailurePolicy {
                max_consecutive_failures: cli.max_page_failures,
            },
            timestamp: None,
        };
        let handle = tokio::spawn(async move { export_playlist(&client, options).await });
        workers.push((playlist_name, handle));
    }

    for (playlist_name, handle) in workers {
        match handle.await {
            Ok(Ok(result)) => info!(
                playlist = %playlist_name,
                records = result.record_count,
                path = %result.csv_path.display(),
                "playlist export finished"
            ),
            Ok(Err(err)) => error!(playlist = %playlist_name, error = %err, "playlist export failed"),
            Err(err) => error!(playlist = %playlist_name, error = %err, "playlist task panicked"),
        }
    }

    info!(
        total_secs = run_started.elapsed().as_secs_f64(),
        focus_secs = fetch_started.elapsed().as_secs_f64(),
        "finished playlist export run"
    );
    Ok(())
}
