//! CLI for the imgfetch image collector.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use commands::run_fetch;

/// Top-level CLI for the imgfetch image collector.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Fetch images from the web, skipping non-images and duplicates", long_about = None)]
pub struct Cli {
    /// Image URLs to fetch. Comma-separated lists are split; when no URLs are
    /// given, a comma-separated list is read interactively from stdin.
    pub urls: Vec<String>,

    /// Destination directory, created if absent.
    #[arg(long, default_value = imgfetch_core::DEFAULT_DEST_DIR, value_name = "DIR")]
    pub dir: PathBuf,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "10", value_name = "SECS")]
    pub timeout: u64,
}

/// Parse arguments and run the fetch batch.
pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    tracing::debug!("parsed CLI: {:?}", cli);
    run_fetch(&cli.urls, &cli.dir, Duration::from_secs(cli.timeout))
}
