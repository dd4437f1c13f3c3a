//! Video ID parser for RTVE pages
//!
//! The numeric backend ID is embedded in inline JSON on the video page.

use regex::Regex;

use crate::error::{Result, SubtitleError};

/// Extracts the numeric video ID from a video page
///
/// Looks for a JSON-like `"id": <digits>` pair with at least five digits
/// and returns the first match.
///
/// # Arguments
/// * `html` - Raw HTML string from the video page
///
/// # Errors
/// - `VideoIdNotFound` if no such pair exists
/// - `ParseError` if the pattern fails to compile
pub fn parse_video_id(html: &str) -> Result<String> {
    let re = Regex::new(r#""id":\s*(\d{5,})"#)
        .map_err(|e| SubtitleError::ParseError(format!("Invalid regex: {e}")))?;

    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(SubtitleError::VideoIdNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_video_id_inline_json() {
        let html = r#"<script>var cfg = {"title":"x","id": 16345678,"type":"video"};</script>"#;
        assert_eq!(parse_video_id(html).unwrap(), "16345678");
    }

    #[test]
    fn test_parse_video_id_without_space() {
        let html = r#"{"id":1234567}"#;
        assert_eq!(parse_video_id(html).unwrap(), "1234567");
    }

    #[test]
    fn test_parse_video_id_first_match_wins() {
        let html = r#"{"id": 11111, "related": [{"id": 22222}]}"#;
        assert_eq!(parse_video_id(html).unwrap(), "11111");
    }

    #[test]
    fn test_parse_video_id_skips_short_ids() {
        let html = r#"{"id": 42, "media": {"id": 987654}}"#;
        assert_eq!(parse_video_id(html).unwrap(), "987654");
    }

    #[test]
    fn test_parse_video_id_ignores_quoted_values() {
        let html = r#"{"id": "16345678"}"#;
        assert!(matches!(parse_video_id(html), Err(SubtitleError::VideoIdNotFound)));
    }

    #[test]
    fn test_parse_video_id_missing() {
        let html = "<html><body><h1>No player here</h1></body></html>";
        assert!(matches!(parse_video_id(html), Err(SubtitleError::VideoIdNotFound)));
    }

    proptest! {
        #[test]
        fn prop_first_id_is_extracted(
            id in "[1-9][0-9]{4,11}",
            other in "[1-9][0-9]{4,11}",
            prefix in "[a-z <>=]{0,40}",
        ) {
            let html = format!(r#"{prefix}{{"id": {id}, "next": {{"id": {other}}}}}"#);
            prop_assert_eq!(parse_video_id(&html).unwrap(), id);
        }
    }
}
