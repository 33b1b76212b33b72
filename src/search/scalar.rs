//! Portable linear-scan search.
//!
//! These define the results every vector backend must reproduce: leftmost
//! match, value equality, and the haystack length when nothing matches.

/// Index of the first element equal to `needle`, or `haystack.len()`
#[inline]
pub fn find<T: PartialEq>(haystack: &[T], needle: &T) -> usize {
    haystack
        .iter()
        .position(|x| x == needle)
        .unwrap_or(haystack.len())
}

/// Index of the first element equal to any element of `set`, or
/// `haystack.len()` (also for an empty set)
#[inline]
pub fn find_first_of<T: PartialEq>(haystack: &[T], set: &[T]) -> usize {
    haystack
        .iter()
        .position(|x| set.contains(x))
        .unwrap_or(haystack.len())
}

/// Index of the first occurrence of `needle` as a contiguous run.
///
/// An empty needle matches at 0. A needle longer than the haystack, or one
/// that does not occur, gives `haystack.len()`.
#[inline]
pub fn search<T: PartialEq>(haystack: &[T], needle: &[T]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    if needle.len() > haystack.len() {
        return haystack.len();
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
        .unwrap_or(haystack.len())
}
