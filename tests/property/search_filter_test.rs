//! Property-based tests for the collection search filter.
//!
//! The filtered view must be a pure function of (collection, search term):
//! exactly the records whose title, description, or any tag contains the
//! term as a case-insensitive substring, in original order.

use linkkeeper_client::managers::collection_manager::filter_records;
use linkkeeper_client::types::bookmark::BookmarkRecord;
use proptest::prelude::*;

/// Strategy for free text fields (titles, descriptions).
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,20}"
}

/// Strategy for a single tag.
fn arb_tag() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,8}"
}

/// Strategy for a collection with unique, server-order ids.
fn arb_collection() -> impl Strategy<Value = Vec<BookmarkRecord>> {
    prop::collection::vec((arb_text(), arb_text(), prop::collection::vec(arb_tag(), 0..4)), 0..12)
        .prop_map(|fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (title, description, tags))| BookmarkRecord {
                    id: format!("bm-{}", i),
                    url: format!("https://example.com/{}", i),
                    title,
                    description,
                    tags,
                    created_at: "2024-01-01T00:00:00Z".to_string(),
                })
                .collect()
        })
}

fn matches(record: &BookmarkRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

// **Property: identity on the empty term**
//
// *For any* collection, `filter(C, "")` SHALL return C unchanged and in
// original order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]
    #[test]
    fn filter_with_empty_term_is_identity(collection in arb_collection()) {
        let filtered = filter_records(&collection, "");
        prop_assert_eq!(filtered, collection);
    }
}

// **Property: exactness and order preservation**
//
// *For any* collection and term, the filtered view SHALL contain exactly
// the matching records, in their original relative order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]
    #[test]
    fn filter_returns_exactly_the_matches_in_order(
        collection in arb_collection(),
        term in "[a-zA-Z0-9]{0,6}",
    ) {
        let needle = term.to_lowercase();
        let expected: Vec<BookmarkRecord> = collection
            .iter()
            .filter(|b| matches(b, &needle))
            .cloned()
            .collect();
        let filtered = filter_records(&collection, &term);
        prop_assert_eq!(filtered, expected);
    }
}

// **Property: case insensitivity**
//
// *For any* collection and ASCII term, searching with any casing of the
// term SHALL return the same records.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]
    #[test]
    fn filter_is_case_insensitive(
        collection in arb_collection(),
        term in "[a-zA-Z]{1,6}",
    ) {
        let upper = filter_records(&collection, &term.to_uppercase());
        let lower = filter_records(&collection, &term.to_lowercase());
        prop_assert_eq!(upper, lower);
    }
}

// **Property: idempotence**
//
// Filtering an already-filtered view with the same term SHALL change nothing.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]
    #[test]
    fn filter_is_idempotent(
        collection in arb_collection(),
        term in "[a-zA-Z0-9]{0,6}",
    ) {
        let once = filter_records(&collection, &term);
        let twice = filter_records(&once, &term);
        prop_assert_eq!(twice, once);
    }
}
