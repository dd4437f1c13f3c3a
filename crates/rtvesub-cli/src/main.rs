//! rtvesub - RTVE Subtitle Downloader
//!
//! Resolves an RTVE video page into its subtitle tracks, lets the user
//! pick languages and saves each one under a name derived from the page
//! title and episode number.

use anyhow::{Context, Result};
use clap::Parser;
use rtvesub_core::{ClientConfig, SubtitleScraper};
use tracing::debug;

mod app;
mod cli;
mod logging;
mod prompt;

use cli::Args;
use prompt::StdinPrompter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let mut config = ClientConfig::default();
    if let Some(api_base) = args.api_base {
        config.api_base = api_base;
    }

    let scraper =
        SubtitleScraper::with_config(config).context("Failed to initialize HTTP client")?;

    let outcome = app::run(&scraper, &mut StdinPrompter, args.url, &args.output_dir).await;
    debug!(?outcome, "Run finished");

    Ok(())
}
