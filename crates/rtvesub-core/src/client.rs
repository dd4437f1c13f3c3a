//! HTTP client for RTVE pages, the subtitle API and subtitle files
//!
//! Every request carries a browser-like User-Agent. Timeouts bound the
//! connect and each individual read, not the whole transfer, so a slow
//! but steady download is never cut off. Requests are never retried.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, SubtitleError};
use crate::url::DEFAULT_API_BASE;

const USER_AGENT: &str = "Mozilla/5.0";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the subtitle API (default: `https://www.rtve.es`)
    pub api_base: String,
    /// User-Agent header sent with every request (default: `Mozilla/5.0`)
    pub user_agent: String,
    /// Connect/read timeout for the page fetch and API call in seconds (default: 20)
    pub request_timeout_secs: u64,
    /// Connect/read timeout for subtitle file downloads in seconds (default: 30)
    pub download_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout_secs: 20,
            download_timeout_secs: 30,
        }
    }
}

/// HTTP client wrapper
///
/// Handles all HTTP communication, including:
/// - Fetching the video page as text
/// - Querying the JSON subtitle listing
/// - Opening streamed responses for subtitle files
pub struct SubtitleClient {
    client: reqwest::Client,
    download_client: reqwest::Client,
    config: ClientConfig,
}

impl SubtitleClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Self::build_client(&config.user_agent, config.request_timeout_secs)?;
        let download_client =
            Self::build_client(&config.user_agent, config.download_timeout_secs)?;

        Ok(Self {
            client,
            download_client,
            config,
        })
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<reqwest::Client> {
        let timeout = Duration::from_secs(timeout_secs);
        reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .map_err(SubtitleError::HttpError)
    }

    /// Fetch a video page and return its body
    ///
    /// # Errors
    /// - `NotFound` - Server returned 404
    /// - `HttpError` - Network errors, timeouts or other non-success statuses
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        self.fetch_text(url).await
    }

    /// Fetch an API document and return its raw body
    ///
    /// Uses the same timeout and error mapping as [`fetch_page`](Self::fetch_page);
    /// decoding is left to the caller.
    pub async fn fetch_json(&self, url: &str) -> Result<String> {
        self.fetch_text(url).await
    }

    /// Start a streamed download
    ///
    /// Returns the response once headers are in; the body has not been
    /// read yet. Uses the longer download timeout.
    ///
    /// # Errors
    /// - `NotFound` - Server returned 404
    /// - `HttpError` - Network errors, timeouts or other non-success statuses
    pub async fn open_download(&self, url: &str) -> Result<reqwest::Response> {
        debug!("GET (stream) {}", url);
        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(SubtitleError::HttpError)?;

        Self::check_status(url, response)
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SubtitleError::HttpError)?;

        let response = Self::check_status(url, response)?;
        response.text().await.map_err(SubtitleError::HttpError)
    }

    fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SubtitleError::NotFound(url.to_string()));
        }

        response.error_for_status().map_err(SubtitleError::HttpError)
    }

    /// Get the active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
