//! Property tests: every available backend agrees with the linear scan.

use lanescan::search::scalar;
use lanescan::{Backend, SimdSearcher};
use proptest::prelude::*;

fn searchers() -> Vec<SimdSearcher> {
    Backend::available()
        .into_iter()
        .map(|backend| SimdSearcher::with_backend(backend).unwrap())
        .collect()
}

/// Small alphabet so needles and set members actually occur
fn haystack_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abcd\0\xff".to_vec()), 0..2000)
}

/// A haystack and a needle that is either cut from it or random
fn haystack_and_needle(len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    haystack_strategy().prop_flat_map(move |haystack| {
        let from_haystack = if haystack.len() >= len {
            (0..=haystack.len() - len)
                .prop_map({
                    let haystack = haystack.clone();
                    move |start| haystack[start..start + len].to_vec()
                })
                .boxed()
        } else {
            prop::collection::vec(any::<u8>(), len).boxed()
        };
        let random = prop::collection::vec(prop::sample::select(b"abcd\0\xff".to_vec()), len);
        (Just(haystack), prop_oneof![from_haystack, random])
    })
}

proptest! {
    #[test]
    fn prop_find_byte_matches_scalar(haystack in haystack_strategy(), needle in any::<u8>()) {
        let expected = scalar::find(&haystack, &needle);
        for searcher in searchers() {
            prop_assert_eq!(searcher.find_byte(&haystack, needle), expected, "{}", searcher.backend());
        }
    }

    #[test]
    fn prop_find_u32_matches_scalar(
        haystack in prop::collection::vec(0u32..8, 0..1000),
        needle in 0u32..9,
    ) {
        let expected = scalar::find(&haystack, &needle);
        for searcher in searchers() {
            prop_assert_eq!(searcher.find_u32(&haystack, needle), expected, "{}", searcher.backend());
        }
    }

    #[test]
    fn prop_find_i32_matches_scalar(
        haystack in prop::collection::vec(-4i32..4, 0..1000),
        needle in -5i32..5,
    ) {
        let expected = scalar::find(&haystack, &needle);
        for searcher in searchers() {
            prop_assert_eq!(searcher.find_i32(&haystack, needle), expected, "{}", searcher.backend());
        }
    }

    #[test]
    fn prop_find_first_of_matches_scalar(
        haystack in prop::collection::vec(any::<u8>(), 0..2000),
        set in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let expected = scalar::find_first_of(&haystack, &set);
        for searcher in searchers() {
            prop_assert_eq!(searcher.find_first_of(&haystack, &set), expected, "{}", searcher.backend());
        }
    }

    #[test]
    fn prop_search4_matches_scalar((haystack, needle) in haystack_and_needle(4)) {
        let expected = scalar::search(&haystack, &needle);
        for searcher in searchers() {
            prop_assert_eq!(searcher.search(&haystack, &needle), expected, "{}", searcher.backend());
        }
    }

    #[test]
    fn prop_search8_matches_scalar((haystack, needle) in haystack_and_needle(8)) {
        let expected = scalar::search(&haystack, &needle);
        for searcher in searchers() {
            prop_assert_eq!(searcher.search(&haystack, &needle), expected, "{}", searcher.backend());
        }
    }

    #[test]
    fn prop_search_any_length_matches_scalar(
        haystack in haystack_strategy(),
        needle in prop::collection::vec(prop::sample::select(b"abcd".to_vec()), 0..12),
    ) {
        let expected = scalar::search(&haystack, &needle);
        for searcher in searchers() {
            prop_assert_eq!(searcher.search(&haystack, &needle), expected, "{}", searcher.backend());
        }
    }

    #[test]
    fn prop_search_is_idempotent((haystack, needle) in haystack_and_needle(8)) {
        let before = haystack.clone();
        let searcher = SimdSearcher::new();
        let first = searcher.search(&haystack, &needle);
        let second = searcher.search(&haystack, &needle);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&haystack, &before);
    }
}
