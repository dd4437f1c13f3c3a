//! URL helper functions for RTVE pages and subtitle files
//!
//! Provides functions for building the subtitle API URL, resolving track
//! URLs and deriving output filenames.

use reqwest::Url;

use crate::error::{Result, SubtitleError};

/// Default host serving both video pages and the subtitle API
pub const DEFAULT_API_BASE: &str = "https://www.rtve.es";

/// Builds the subtitle listing URL for a video
///
/// # Example
/// ```
/// use rtvesub_core::url::build_subtitles_api_url;
/// let url = build_subtitles_api_url("https://www.rtve.es", "16345678");
/// assert_eq!(url, "https://www.rtve.es/api/videos/16345678/subtitulos");
/// ```
pub fn build_subtitles_api_url(api_base: &str, video_id: &str) -> String {
    format!(
        "{}/api/videos/{}/subtitulos",
        api_base.trim_end_matches('/'),
        video_id
    )
}

/// Resolves a track `src` against the page it was listed for
///
/// Absolute URLs are returned unchanged; relative ones are joined onto `base`.
///
/// # Errors
/// Returns `InvalidUrl` if `src` is relative and `base` is not a valid absolute URL
pub fn resolve_track_url(base: &str, src: &str) -> Result<String> {
    if let Ok(url) = Url::parse(src) {
        return Ok(url.to_string());
    }

    let base = Url::parse(base).map_err(|e| SubtitleError::InvalidUrl(format!("{base}: {e}")))?;
    base.join(src)
        .map(|url| url.to_string())
        .map_err(|e| SubtitleError::InvalidUrl(format!("{src}: {e}")))
}

/// Extracts the file extension (with the dot) from a URL's last path segment
///
/// Query strings and fragments are ignored. Names without a dot, or whose
/// only dots are leading ones, yield an empty string.
///
/// # Example
/// ```
/// use rtvesub_core::url::file_extension;
/// assert_eq!(file_extension("https://cdn.rtve.es/subs/123_es.vtt?v=2"), ".vtt");
/// assert_eq!(file_extension("https://cdn.rtve.es/subs/123"), "");
/// ```
pub fn file_extension(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);

    // Drop scheme and authority so a bare host never looks like a filename
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or(""),
        None if path.starts_with("//") => {
            let rest = &path[2..];
            rest.find('/').map(|i| &rest[i..]).unwrap_or("")
        }
        None => path,
    };

    let name = path.rsplit('/').next().unwrap_or(path);
    let leading_dots = name.len() - name.trim_start_matches('.').len();

    match name[leading_dots..].rfind('.') {
        Some(i) => name[leading_dots + i..].to_string(),
        None => String::new(),
    }
}

/// Builds the local filename for one track: `{base}_{lang}{ext}`
///
/// Path separators in `lang` become `_` so the file always lands directly
/// in the output directory.
///
/// # Example
/// ```
/// use rtvesub_core::url::build_output_filename;
/// assert_eq!(build_output_filename("serie_x_S02E05", "es", ".vtt"), "serie_x_S02E05_es.vtt");
/// ```
pub fn build_output_filename(base: &str, lang: &str, extension: &str) -> String {
    let lang = lang.replace(['/', '\\'], "_");
    format!("{}_{}{}", base, lang, extension)
}
