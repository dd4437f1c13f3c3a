//! RTVE Subtitle Downloader Core Library
//!
//! Provides an async API for turning an RTVE video page into a set of
//! locally saved subtitle files.
//!
//! # Overview
//!
//! The pipeline is strictly linear:
//! - fetch the video page and pull out the numeric video ID
//! - derive a base filename from the page title and season/episode marker
//! - query the subtitle API for available language tracks
//! - let the caller pick a subset (see [`parse_selection`])
//! - stream each selected track to `{base}_{lang}{ext}`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use indicatif::ProgressBar;
//! use rtvesub_core::{SubtitleScraper, Result};
//! use rtvesub_core::url::{build_output_filename, file_extension};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = SubtitleScraper::new()?;
//!     let video = scraper
//!         .resolve("https://www.rtve.es/play/videos/serie/capitulo-5/16345678/")
//!         .await?;
//!
//!     let tracks = scraper.fetch_subtitles(&video.video_id).await?;
//!     if let Some(first) = tracks.first() {
//!         let ext = file_extension(&first.src);
//!         for track in &tracks {
//!             let name = build_output_filename(&video.base_filename, &track.lang, &ext);
//!             scraper
//!                 .download(&video, track, Path::new(&name), |_| false, |_| ProgressBar::hidden())
//!                 .await?;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod download;
mod error;
pub mod parser;
mod scraper;
pub mod selection;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, SubtitleClient};

// Re-export downloader
pub use download::download_to_file;

// Re-export error types
pub use error::{Result, SubtitleError};

// Re-export parser functions
pub use parser::{parse_base_filename, parse_subtitle_catalog, parse_video_id};

// Re-export main scraper API
pub use scraper::SubtitleScraper;

// Re-export selection helpers
pub use selection::{Selection, language_name, parse_selection};

// Re-export data types
pub use types::{DownloadOutcome, EpisodeTag, ResolvedVideo, SubtitleTrack};
