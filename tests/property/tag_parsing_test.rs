//! Property-based tests for tag input parsing.
//!
//! Tag input is free text split on commas: each segment trimmed, empty
//! segments discarded, duplicates and order preserved.

use linkkeeper_client::managers::form_controller::split_tags;
use proptest::prelude::*;

/// Strategy for a single clean tag (no commas, no surrounding whitespace).
fn arb_tag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

// **Property: padding round-trip**
//
// *For any* sequence of clean tags joined with commas and arbitrary
// surrounding whitespace, parsing SHALL recover the original sequence,
// duplicates included.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]
    #[test]
    fn padded_tags_round_trip(
        tags in prop::collection::vec(arb_tag(), 0..8),
        pad in "[ ]{0,3}",
    ) {
        let input = tags
            .iter()
            .map(|t| format!("{}{}{}", pad, t, pad))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(split_tags(&input), tags);
    }
}

// **Property: outputs are clean**
//
// *For any* input text, every parsed tag SHALL be non-empty and carry no
// leading or trailing whitespace.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]
    #[test]
    fn parsed_tags_are_trimmed_and_non_empty(input in "[a-z ,]{0,40}") {
        for tag in split_tags(&input) {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
        }
    }
}

// **Property: reparse stability**
//
// Joining parsed tags with commas and parsing again SHALL be a no-op.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]
    #[test]
    fn parsing_is_stable_under_rejoin(input in "[a-z ,]{0,40}") {
        let parsed = split_tags(&input);
        let rejoined = parsed.join(",");
        prop_assert_eq!(split_tags(&rejoined), parsed);
    }
}
