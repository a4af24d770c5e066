//! Which fonts did the page try to preload?

use std::collections::HashSet;

use crate::network::NetworkRecord;

/// Font URLs the page requested through a preload declaration
pub type PreloadAttemptSet = HashSet<String>;

/// Collect the URLs of font fetches declared via `<link rel=preload>`
///
/// This only asks whether a preload was attempted. A preload the browser
/// failed to reuse (and fetched again) still counts; see
/// [`successfully_reused_preloads`](super::successfully_reused_preloads)
/// for narrowing that down.
#[must_use]
pub fn urls_attempted_to_preload(records: &[NetworkRecord]) -> PreloadAttemptSet {
    records
        .iter()
        .filter(|record| record.is_font())
        .filter(|record| record.is_link_preload)
        .map(|record| record.url.clone())
        .collect()
}
