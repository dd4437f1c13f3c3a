//! Track selection helpers
//!
//! Turns the user's free-form answer ("1,3", "all") into a subset of the
//! catalog and maps language codes to display names.

use crate::error::{Result, SubtitleError};
use crate::types::SubtitleTrack;

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Español (Spanish)"),
    ("ca", "Català (Catalan)"),
    ("gl", "Galego (Galician)"),
    ("eu", "Euskera (Basque)"),
    ("va", "Valencià (Valencian)"),
];

/// Human-readable name for a language code
///
/// Unknown codes fall back to the uppercased code.
///
/// # Example
/// ```
/// use rtvesub_core::language_name;
/// assert_eq!(language_name("ES"), "Español (Spanish)");
/// assert_eq!(language_name("fr"), "FR");
/// ```
pub fn language_name(code: &str) -> String {
    let lower = code.to_lowercase();
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == lower)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// A parsed selection over a catalog of known length
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Zero-based indices of selected tracks, ascending and unique
    pub indices: Vec<usize>,

    /// Out-of-range values exactly as the user typed them (1-based)
    pub rejected: Vec<i64>,
}

impl Selection {
    /// Selects every track
    pub fn all(count: usize) -> Self {
        Self {
            indices: (0..count).collect(),
            rejected: Vec::new(),
        }
    }

    /// Returns the selected tracks in catalog order
    pub fn apply(&self, tracks: &[SubtitleTrack]) -> Vec<SubtitleTrack> {
        self.indices
            .iter()
            .filter_map(|&i| tracks.get(i).cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Parses the selection answer for a menu of `count` tracks
///
/// Accepts `all` (any case) or comma-separated 1-based indices. Indices
/// outside `1..=count` are collected in [`Selection::rejected`] and do not
/// affect the valid ones. The result is a subset: order and repeats in the
/// input are ignored.
///
/// # Errors
/// Returns `InvalidSelection` if any token is not an integer
pub fn parse_selection(input: &str, count: usize) -> Result<Selection> {
    let choice = input.trim().to_lowercase();
    if choice == "all" {
        return Ok(Selection::all(count));
    }

    let numbers = choice
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| SubtitleError::InvalidSelection(format!("'{}' is not a number", token)))
        })
        .collect::<Result<Vec<i64>>>()?;

    let mut selected = vec![false; count];
    let mut rejected = Vec::new();

    for n in numbers {
        match usize::try_from(n) {
            Ok(i) if (1..=count).contains(&i) => selected[i - 1] = true,
            _ => rejected.push(n),
        }
    }

    let indices = selected
        .iter()
        .enumerate()
        .filter_map(|(i, &chosen)| chosen.then_some(i))
        .collect();

    Ok(Selection { indices, rejected })
}
