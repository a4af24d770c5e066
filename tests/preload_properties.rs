//! Property tests for preload detection and gap computation

use font_preload_audit::{
    NetworkRecord, PreloadAttemptSet, ResourceType, UrlSet, compute_gap, urls_attempted_to_preload,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn resource_type() -> impl Strategy<Value = Option<ResourceType>> {
    prop_oneof![
        Just(None),
        Just(Some(ResourceType::Font)),
        Just(Some(ResourceType::Stylesheet)),
        Just(Some(ResourceType::Script)),
        Just(Some(ResourceType::Other)),
    ]
}

fn url() -> impl Strategy<Value = String> {
    "[a-e]\\.woff2".prop_map(|s| format!("https://example.com/{s}"))
}

fn record() -> impl Strategy<Value = NetworkRecord> {
    (url(), resource_type(), any::<bool>()).prop_map(|(url, resource_type, is_link_preload)| {
        NetworkRecord {
            request_id: String::new(),
            url,
            resource_type,
            is_link_preload,
        }
    })
}

proptest! {
    #[test]
    fn attempted_is_subset_of_font_urls(records in prop::collection::vec(record(), 0..20)) {
        let font_urls: HashSet<&str> = records
            .iter()
            .filter(|r| r.resource_type == Some(ResourceType::Font))
            .map(|r| r.url.as_str())
            .collect();
        for url in urls_attempted_to_preload(&records) {
            prop_assert!(font_urls.contains(url.as_str()));
        }
    }

    #[test]
    fn gap_is_idempotent(
        hints in prop::collection::vec(url(), 0..8),
        attempted in prop::collection::hash_set(url(), 0..8),
    ) {
        let hints: UrlSet = hints.into_iter().collect();
        prop_assert_eq!(compute_gap(&hints, &attempted), compute_gap(&hints, &attempted));
    }

    #[test]
    fn empty_hints_give_empty_gap(attempted in prop::collection::hash_set(url(), 0..8)) {
        prop_assert!(compute_gap(&UrlSet::new(), &attempted).is_empty());
    }

    #[test]
    fn preloading_every_hint_closes_gap(hints in prop::collection::vec(url(), 0..8)) {
        let attempted: PreloadAttemptSet = hints.iter().cloned().collect();
        let hints: UrlSet = hints.into_iter().collect();
        prop_assert!(compute_gap(&hints, &attempted).is_empty());
    }

    #[test]
    fn no_preloads_flags_every_hint(hints in prop::collection::vec(url(), 1..8)) {
        let hints: UrlSet = hints.into_iter().collect();
        let gap = compute_gap(&hints, &PreloadAttemptSet::new());
        let flagged: Vec<&String> = gap.iter().map(|item| &item.url).collect();
        let expected: Vec<&String> = hints.iter().collect();
        prop_assert_eq!(flagged, expected);
    }
}

#[test]
fn mixed_records_scenario() {
    let records = vec![
        NetworkRecord::new("a.woff2", ResourceType::Font, true),
        NetworkRecord::new("c.woff2", ResourceType::Font, true),
    ];
    let attempted = urls_attempted_to_preload(&records);
    let expected: PreloadAttemptSet = ["a.woff2", "c.woff2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(attempted, expected);

    let hints: UrlSet = ["a.woff2", "b.woff2"].iter().map(|s| s.to_string()).collect();
    let gap = compute_gap(&hints, &attempted);
    assert_eq!(gap.len(), 1);
    assert_eq!(gap[0].url, "b.woff2");
}
