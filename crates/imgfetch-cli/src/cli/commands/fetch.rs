//! `imgfetch` driver – collect URLs, run the pipeline per URL, report.

use anyhow::{Context, Result};
use imgfetch_core::fetch::FetchOptions;
use imgfetch_core::fingerprint::FingerprintSet;
use imgfetch_core::outcome::Outcome;
use imgfetch_core::pipeline;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

/// Splits raw argument strings on commas, trims each segment, and drops
/// empties. Each CLI argument may itself be a comma-separated list.
fn split_urls(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prompts for a comma-separated URL list on stdin.
fn prompt_for_urls() -> Result<Vec<String>> {
    print!("Please enter image URL(s) (comma-separated): ");
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read URLs from stdin")?;
    Ok(split_urls(&[line]))
}

/// Runs the whole batch: one pipeline call per URL, in input order, one
/// status line per outcome, then a summary. Always returns Ok after
/// attempting every URL; per-URL failures never abort the batch.
pub fn run_fetch(raw_urls: &[String], dir: &Path, timeout: Duration) -> Result<()> {
    println!("Welcome to the Ubuntu Image Fetcher");
    println!("A tool for mindfully collecting images from the web\n");

    let urls = if raw_urls.is_empty() {
        prompt_for_urls()?
    } else {
        split_urls(raw_urls)
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("create destination directory {}", dir.display()))?;

    let options = FetchOptions {
        timeout,
        ..FetchOptions::default()
    };
    let mut seen = FingerprintSet::new();
    let mut saved = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for url in &urls {
        match pipeline::fetch_image(url, &mut seen, dir, &options) {
            Outcome::Saved(path) => {
                saved += 1;
                println!("✓ Saved {} -> {}", url, path.display());
            }
            Outcome::SkippedNotImage(ct) => {
                skipped += 1;
                println!("✗ Skipped {} (not an image, Content-Type={})", url, ct);
            }
            Outcome::SkippedDuplicate => {
                skipped += 1;
                println!("✗ Skipped duplicate: {}", url);
            }
            Outcome::Failed(detail) => {
                failed += 1;
                println!("✗ Failed {}: {}", url, detail);
            }
        }
    }

    println!(
        "\n{} saved, {} skipped, {} failed of {} URL(s)",
        saved,
        skipped,
        failed,
        urls.len()
    );
    println!("Connection strengthened. Community enriched.");

    Ok(())
}
