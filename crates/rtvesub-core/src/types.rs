//! Core data types for the RTVE subtitle scraper
//!
//! Contains the main data structures passed along the download pipeline.

use std::fmt;
use std::path::PathBuf;

/// One subtitle file offered by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    /// Short language code (e.g., "es", "en")
    pub lang: String,

    /// Absolute or page-relative URL of the subtitle file
    pub src: String,
}

/// Season/episode numbers detected in a page title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeTag {
    pub season: u64,
    pub episode: u64,
}

impl fmt::Display for EpisodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}

/// Everything learned from the video page itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVideo {
    /// Numeric backend video ID (e.g., "16345678")
    pub video_id: String,

    /// URL of the page the ID was taken from
    pub page_url: String,

    /// Filename stem shared by every downloaded track
    pub base_filename: String,
}

/// Result of a single track download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// File written to disk
    Saved { path: PathBuf, bytes: u64 },

    /// Target already existed and overwrite was declined
    Skipped { path: PathBuf },
}
