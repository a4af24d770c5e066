//! Fonts that qualify for a preload but did not get one

use serde::{Deserialize, Serialize};

use super::detector::PreloadAttemptSet;
use crate::font_display::UrlSet;

/// One font that should have been preloaded; becomes one report row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontGapItem {
    pub url: String,
}

/// Hint URLs, in their original order, that were never preload-attempted
///
/// Matching is exact string equality: no trailing-slash, fragment or
/// query-string normalization happens on either side.
#[must_use]
pub fn compute_gap(hint_urls: &UrlSet, attempted: &PreloadAttemptSet) -> Vec<FontGapItem> {
    hint_urls
        .iter()
        .filter(|url| !attempted.contains(url.as_str()))
        .map(|url| FontGapItem { url: url.clone() })
        .collect()
}
