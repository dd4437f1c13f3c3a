//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Download subtitles for an RTVE video page
#[derive(Parser, Debug)]
#[command(name = "rtvesub")]
#[command(version, about = "RTVE subtitle downloader with smart file naming")]
pub struct Args {
    /// RTVE video page URL (prompted for when omitted)
    pub url: Option<String>,

    /// Directory the subtitle files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Override the subtitle API host
    #[arg(long, hide = true)]
    pub api_base: Option<String>,
}
