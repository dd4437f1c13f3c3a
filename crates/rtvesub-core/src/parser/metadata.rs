//! Title and episode parser for RTVE video pages
//!
//! Derives the filesystem-safe base filename shared by every subtitle
//! downloaded for one video.

use regex::Regex;
use scraper::{Html, Selector};
use tracing::warn;

use crate::error::{Result, SubtitleError};
use crate::types::EpisodeTag;

/// Base filename used when the page offers nothing usable
pub const GENERIC_BASE_FILENAME: &str = "video_file";

const EPISODE_PATTERN: &str = r"(?i)(?:Temporada|T)\s*(\d+).*?(?:Cap[íi]tulo|Episodio|E)\s*(\d+)";

/// Derives the base filename from a video page
///
/// Uses the page title (see [`extract_title`]), strips the season/episode
/// marker and any `| Site` suffix, slugifies the rest and appends an
/// `_SxxEyy` tag when a marker was found.
///
/// Never fails and never returns an empty string: any parsing problem
/// falls back to [`GENERIC_BASE_FILENAME`].
///
/// # Example
/// ```
/// use rtvesub_core::parser::parse_base_filename;
/// let html = r#"<meta property="og:title" content="Serie X - Temporada 2 Capítulo 5 | Site">"#;
/// assert_eq!(parse_base_filename(html), "serie_x_S02E05");
/// ```
pub fn parse_base_filename(html: &str) -> String {
    match extract_title(html) {
        Ok(Some(title)) => match base_filename_from_title(&title) {
            Ok(name) => name,
            Err(e) => {
                warn!("Could not analyze page title {title:?}: {e}");
                GENERIC_BASE_FILENAME.to_string()
            }
        },
        Ok(None) => GENERIC_BASE_FILENAME.to_string(),
        Err(e) => {
            warn!("Could not analyze page details: {e}");
            GENERIC_BASE_FILENAME.to_string()
        }
    }
}

/// Extracts the display title from a video page
///
/// Prefers the `og:title` meta tag, then the first `<h1>`.
///
/// # Returns
/// `None` if neither yields any text
pub fn extract_title(html: &str) -> Result<Option<String>> {
    let document = Html::parse_document(html);

    let og_selector = Selector::parse(r#"meta[property="og:title"]"#)
        .map_err(|e| SubtitleError::ParseError(format!("Invalid selector: {:?}", e)))?;
    if let Some(content) = document
        .select(&og_selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        && !content.is_empty()
    {
        return Ok(Some(content.to_string()));
    }

    let h1_selector = Selector::parse("h1")
        .map_err(|e| SubtitleError::ParseError(format!("Invalid selector: {:?}", e)))?;
    Ok(document.select(&h1_selector).next().map(|el| {
        el.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<String>()
    }))
}

/// Builds the base filename from an already extracted title
pub fn base_filename_from_title(title: &str) -> Result<String> {
    let (title, episode) = split_episode_marker(title)?;

    let mut slug = slugify(&title)?;
    if slug.is_empty() {
        slug = GENERIC_BASE_FILENAME.to_string();
    }

    Ok(match episode {
        Some(tag) => format!("{}_{}", slug, tag),
        None => slug,
    })
}

/// Separates the season/episode marker from a title
///
/// Recognizes forms like "Temporada 2 Capítulo 5", "T3 E7" or
/// "Temporada 1 Episodio 12" (case-insensitive). The numbers come from the
/// first marker; every marker is removed, as is everything after the first
/// `|` (site branding). The result is trimmed.
pub fn split_episode_marker(title: &str) -> Result<(String, Option<EpisodeTag>)> {
    let episode_re = Regex::new(EPISODE_PATTERN)
        .map_err(|e| SubtitleError::ParseError(format!("Invalid regex: {e}")))?;
    let suffix_re = Regex::new(r"\|.*")
        .map_err(|e| SubtitleError::ParseError(format!("Invalid regex: {e}")))?;

    let episode = episode_re.captures(title).and_then(|caps| {
        let season = caps.get(1)?.as_str().parse::<u64>().ok()?;
        let episode = caps.get(2)?.as_str().parse::<u64>().ok()?;
        Some(EpisodeTag { season, episode })
    });

    let cleaned = episode_re.replace_all(title, "");
    let cleaned = suffix_re.replace_all(&cleaned, "");

    Ok((cleaned.trim().to_string(), episode))
}

/// Turns a title into a lowercase, underscore-joined slug
///
/// # Example
/// ```
/// use rtvesub_core::parser::slugify;
/// assert_eq!(slugify("  La Revuelta - Especial!  ").unwrap(), "la_revuelta_especial");
/// ```
pub fn slugify(title: &str) -> Result<String> {
    let strip_re = Regex::new(r"[^a-z0-9\s-]")
        .map_err(|e| SubtitleError::ParseError(format!("Invalid regex: {e}")))?;
    let join_re = Regex::new(r"[\s-]+")
        .map_err(|e| SubtitleError::ParseError(format!("Invalid regex: {e}")))?;

    let lower = title.to_lowercase();
    let stripped = strip_re.replace_all(&lower, "");
    let joined = join_re.replace_all(&stripped, "_");

    Ok(joined.trim_matches('_').to_string())
}
