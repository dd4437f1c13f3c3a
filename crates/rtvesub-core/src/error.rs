//! Error types for the RTVE subtitle scraper
//!
//! Provides a single error enum with human-readable messages covering
//! transport failures, missing page data, bad user input and disk writes.

use thiserror::Error;

/// Error type for all subtitle scraper operations
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// HTTP request failed (connection, timeout or non-success status)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered 404 for the requested resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body could not be parsed
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Page was fetched but carries no numeric video ID
    #[error("Could not find a video ID on the page")]
    VideoIdNotFound,

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Selection input contained a non-numeric token
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Writing a downloaded file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SubtitleError {
    /// Whether the error came from the network rather than from the data
    pub fn is_transport(&self) -> bool {
        matches!(self, SubtitleError::HttpError(_) | SubtitleError::NotFound(_))
    }
}

/// Result type alias for subtitle scraper operations
pub type Result<T> = std::result::Result<T, SubtitleError>;
