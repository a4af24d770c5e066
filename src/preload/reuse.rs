//! Preloads the browser actually reused
//!
//! A preloaded font is wasted when the browser cannot match the later
//! stylesheet-initiated request against it (for example a missing
//! `crossorigin` attribute puts the two in different cache partitions) and
//! fetches the font a second time.

use std::collections::HashSet;

use super::detector::PreloadAttemptSet;
use crate::network::NetworkRecord;

/// Preload-attempted font URLs that were not fetched again afterwards
#[must_use]
pub fn successfully_reused_preloads(records: &[NetworkRecord]) -> HashSet<String> {
    let mut preloaded: HashSet<&str> = HashSet::new();
    let mut refetched: HashSet<&str> = HashSet::new();

    for record in records.iter().filter(|record| record.is_font()) {
        if record.is_link_preload {
            preloaded.insert(&record.url);
        } else if preloaded.contains(record.url.as_str()) {
            refetched.insert(&record.url);
        }
    }

    preloaded
        .difference(&refetched)
        .map(|url| (*url).to_string())
        .collect()
}

/// Narrow preload attempts down to the ones that were reused
#[must_use]
pub fn retain_reused(attempted: &PreloadAttemptSet, reused: &HashSet<String>) -> PreloadAttemptSet {
    attempted.intersection(reused).cloned().collect()
}
