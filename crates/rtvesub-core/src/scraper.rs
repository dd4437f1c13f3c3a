//! Main scraper API for RTVE subtitles
//!
//! Provides the high-level API combining the HTTP client, the parsers
//! and the downloader.

use std::path::Path;

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::client::{ClientConfig, SubtitleClient};
use crate::download::download_to_file;
use crate::error::{Result, SubtitleError};
use crate::parser::{parse_base_filename, parse_subtitle_catalog, parse_video_id};
use crate::types::{DownloadOutcome, ResolvedVideo, SubtitleTrack};
use crate::url::{build_subtitles_api_url, resolve_track_url};

/// Main scraper API for RTVE subtitles
///
/// Resolves a video page into its backend ID and base filename, lists the
/// subtitle tracks and downloads them one at a time.
pub struct SubtitleScraper {
    client: SubtitleClient,
}

impl SubtitleScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = SubtitleClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = SubtitleClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Fetch a video page and resolve its ID and base filename
    ///
    /// # Arguments
    /// * `page_url` - URL of an RTVE video page
    ///
    /// # Errors
    /// - `InvalidUrl` if `page_url` is empty or whitespace only
    /// - `HttpError` / `NotFound` if the page cannot be fetched
    /// - `VideoIdNotFound` if the page carries no video ID
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> rtvesub_core::Result<()> {
    /// use rtvesub_core::SubtitleScraper;
    /// let scraper = SubtitleScraper::new()?;
    /// let video = scraper.resolve("https://www.rtve.es/play/videos/serie/capitulo-5/16345678/").await?;
    /// println!("{} -> {}", video.video_id, video.base_filename);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve(&self, page_url: &str) -> Result<ResolvedVideo> {
        let page_url = page_url.trim();
        if page_url.is_empty() {
            return Err(SubtitleError::InvalidUrl(
                "Page URL cannot be empty".to_string(),
            ));
        }

        let html = self.client.fetch_page(page_url).await?;
        let video_id = parse_video_id(&html)?;
        info!("Found video ID {}", video_id);

        let base_filename = parse_base_filename(&html);
        info!("Detected base filename {}", base_filename);

        Ok(ResolvedVideo {
            video_id,
            page_url: page_url.to_string(),
            base_filename,
        })
    }

    /// Query the subtitle API for a video
    ///
    /// # Returns
    /// Tracks in API order, empty if the video has none
    ///
    /// # Errors
    /// - `HttpError` / `NotFound` if the API cannot be reached
    /// - `ParseError` if the response is not a JSON object
    pub async fn fetch_subtitles(&self, video_id: &str) -> Result<Vec<SubtitleTrack>> {
        if video_id.trim().is_empty() {
            return Err(SubtitleError::ParseError(
                "Video ID cannot be empty".to_string(),
            ));
        }

        let api_url = build_subtitles_api_url(&self.client.config().api_base, video_id);
        let body = self.client.fetch_json(&api_url).await?;
        parse_subtitle_catalog(&body)
    }

    /// Query the subtitle API, treating every failure as "no subtitles"
    pub async fn list_subtitles(&self, video_id: &str) -> Vec<SubtitleTrack> {
        match self.fetch_subtitles(video_id).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!("Subtitle listing for {} failed: {}", video_id, e);
                Vec::new()
            }
        }
    }

    /// Download one track to `target`
    ///
    /// Relative track URLs are resolved against the video page. See
    /// [`download_to_file`] for the overwrite and progress behavior.
    pub async fn download<F, P>(
        &self,
        video: &ResolvedVideo,
        track: &SubtitleTrack,
        target: &Path,
        confirm_overwrite: F,
        progress: P,
    ) -> Result<DownloadOutcome>
    where
        F: FnOnce(&Path) -> bool,
        P: FnOnce(u64) -> ProgressBar,
    {
        let url = resolve_track_url(&video.page_url, &track.src)?;
        download_to_file(&self.client, &url, target, confirm_overwrite, progress).await
    }
}
