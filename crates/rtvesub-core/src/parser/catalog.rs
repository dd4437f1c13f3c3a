//! Subtitle catalog parser for the RTVE API
//!
//! The listing endpoint answers with `{ "page": { "items": [ ... ] } }`
//! where each usable item carries a `lang` code and a `src` URL.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SubtitleError};
use crate::types::SubtitleTrack;

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    page: Option<CatalogPage>,
}

#[derive(Debug, Deserialize)]
struct CatalogPage {
    /// Kept raw so one malformed item cannot reject the whole page
    #[serde(default)]
    items: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct CatalogItem {
    lang: Option<String>,
    src: Option<String>,
}

impl CatalogItem {
    fn into_track(self) -> Option<SubtitleTrack> {
        Some(SubtitleTrack {
            lang: self.lang?,
            src: self.src?,
        })
    }
}

/// Parses the subtitle listing JSON into tracks
///
/// Items missing a string `lang` or `src` are dropped; the remaining
/// tracks keep the API's order. A missing or null `page` or `items` field
/// means the video simply has no subtitles.
///
/// # Errors
/// Returns `ParseError` if the body is not JSON, its root is not an object
/// or `page` is not an object
pub fn parse_subtitle_catalog(json: &str) -> Result<Vec<SubtitleTrack>> {
    let data: Value = serde_json::from_str(json)
        .map_err(|e| SubtitleError::ParseError(format!("Invalid catalog JSON: {e}")))?;

    if !data.is_object() {
        return Err(SubtitleError::ParseError(
            "Catalog root is not an object".to_string(),
        ));
    }

    let response: CatalogResponse = serde_json::from_value(data)
        .map_err(|e| SubtitleError::ParseError(format!("Unexpected catalog shape: {e}")))?;

    let items = response
        .page
        .and_then(|page| page.items)
        .unwrap_or_default();

    Ok(items
        .iter()
        .filter_map(|item| CatalogItem::deserialize(item).ok())
        .filter_map(CatalogItem::into_track)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_keeps_order() {
        let json = r#"{
            "page": {
                "items": [
                    {"lang": "es", "src": "https://cdn.rtve.es/subs/1_es.vtt", "kind": "subtitles"},
                    {"lang": "en", "src": "https://cdn.rtve.es/subs/1_en.vtt"},
                    {"lang": "ca", "src": "https://cdn.rtve.es/subs/1_ca.vtt"}
                ]
            }
        }"#;

        let tracks = parse_subtitle_catalog(json).unwrap();
        let langs: Vec<&str> = tracks.iter().map(|t| t.lang.as_str()).collect();
        assert_eq!(langs, vec!["es", "en", "ca"]);
        assert_eq!(tracks[1].src, "https://cdn.rtve.es/subs/1_en.vtt");
    }

    #[test]
    fn test_parse_catalog_drops_incomplete_items() {
        let json = r#"{"page": {"items": [
            {"lang": "es"},
            {"src": "https://cdn.rtve.es/subs/orphan.vtt"},
            {"lang": "eu", "src": "https://cdn.rtve.es/subs/1_eu.vtt"},
            {"lang": null, "src": "https://cdn.rtve.es/subs/null.vtt"},
            {"lang": 3, "src": "https://cdn.rtve.es/subs/number.vtt"},
            "not an object"
        ]}}"#;

        let tracks = parse_subtitle_catalog(json).unwrap();
        assert_eq!(
            tracks,
            vec![SubtitleTrack {
                lang: "eu".to_string(),
                src: "https://cdn.rtve.es/subs/1_eu.vtt".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_catalog_missing_fields_is_empty() {
        assert!(parse_subtitle_catalog("{}").unwrap().is_empty());
        assert!(parse_subtitle_catalog(r#"{"page": {}}"#).unwrap().is_empty());
        assert!(parse_subtitle_catalog(r#"{"page": {"items": []}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_catalog_invalid_json() {
        let result = parse_subtitle_catalog("<html>Service Unavailable</html>");
        assert!(matches!(result, Err(SubtitleError::ParseError(_))));
    }

    #[test]
    fn test_parse_catalog_null_fields_are_empty() {
        assert!(parse_subtitle_catalog(r#"{"page": null}"#).unwrap().is_empty());
        assert!(parse_subtitle_catalog(r#"{"page": {"items": null}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_catalog_page_not_an_object() {
        let result = parse_subtitle_catalog(r#"{"page": 5}"#);
        assert!(matches!(result, Err(SubtitleError::ParseError(_))));
    }

    #[test]
    fn test_parse_catalog_non_object_root() {
        let result = parse_subtitle_catalog("[1, 2, 3]");
        assert!(matches!(result, Err(SubtitleError::ParseError(_))));
    }
}
