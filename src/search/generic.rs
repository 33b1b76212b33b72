//! Element-generic entry points.
//!
//! Slices of 1-byte types (`u8`, `i8`, `bool`) are searched with the byte
//! kernels and slices of 4-byte integer-like types (`u32`, `i32`, `char`) with
//! the 32-bit kernels. Every other element type uses the linear scan. Floats
//! are deliberately scalar: `0.0 == -0.0` and `NaN != NaN` disagree with
//! bitwise lane compares.
//!
//! ```
//! use lanescan::search::generic::{find, find_first_of, find_subrange};
//!
//! assert_eq!(find(&[3i8, -4, 5], -4), 1);
//! assert_eq!(find(&['a', 'β', 'c'], 'c'), 2);
//! assert_eq!(find_first_of(&[1u16, 2, 3], &[9, 3]), 2);
//! assert_eq!(find_subrange(&[true, false, false, true], &[false, true]), 2);
//! ```

use super::scalar;
use super::searcher::{global_searcher, SimdSearcher};

/// An element type the search entry points accept.
///
/// The provided methods are the linear scan; types with a vector
/// representation override them.
pub trait Searchable: Copy + PartialEq {
    /// Index of the first element equal to `needle`, or `haystack.len()`
    fn find_in(searcher: &SimdSearcher, haystack: &[Self], needle: Self) -> usize {
        let _ = searcher;
        scalar::find(haystack, &needle)
    }

    /// Index of the first element contained in `set`, or `haystack.len()`
    fn find_first_of_in(searcher: &SimdSearcher, haystack: &[Self], set: &[Self]) -> usize {
        let _ = searcher;
        scalar::find_first_of(haystack, set)
    }

    /// Index of the first occurrence of `needle`, or `haystack.len()`
    fn find_subrange_in(searcher: &SimdSearcher, haystack: &[Self], needle: &[Self]) -> usize {
        let _ = searcher;
        scalar::search(haystack, needle)
    }
}

/// Types whose every value is one byte with the same equality as the byte.
///
/// # Safety
///
/// `Self` must have size 1, and two values must be equal exactly when their
/// bytes are equal.
unsafe trait ByteLike: Copy {}

unsafe impl ByteLike for u8 {}
unsafe impl ByteLike for i8 {}
unsafe impl ByteLike for bool {}

/// Types whose every value is four bytes with the same equality as the
/// 32-bit word.
///
/// # Safety
///
/// `Self` must have size and alignment 4, and two values must be equal
/// exactly when their bits are equal.
unsafe trait WordLike: Copy {}

unsafe impl WordLike for u32 {}
unsafe impl WordLike for i32 {}
unsafe impl WordLike for char {}

#[inline]
fn as_bytes<T: ByteLike>(items: &[T]) -> &[u8] {
    // ByteLike guarantees one initialized byte per element
    unsafe { std::slice::from_raw_parts(items.as_ptr().cast::<u8>(), items.len()) }
}

#[inline]
fn as_words<T: WordLike>(items: &[T]) -> &[u32] {
    // WordLike guarantees size and alignment of u32
    unsafe { std::slice::from_raw_parts(items.as_ptr().cast::<u32>(), items.len()) }
}

#[inline]
fn byte_of<T: ByteLike>(item: T) -> u8 {
    as_bytes(std::slice::from_ref(&item))[0]
}

#[inline]
fn word_of<T: WordLike>(item: T) -> u32 {
    as_words(std::slice::from_ref(&item))[0]
}

macro_rules! searchable_bytes {
    ($($ty:ty),*) => {$(
        impl Searchable for $ty {
            #[inline]
            fn find_in(searcher: &SimdSearcher, haystack: &[Self], needle: Self) -> usize {
                searcher.find_byte(as_bytes(haystack), byte_of(needle))
            }

            #[inline]
            fn find_first_of_in(searcher: &SimdSearcher, haystack: &[Self], set: &[Self]) -> usize {
                searcher.find_first_of(as_bytes(haystack), as_bytes(set))
            }

            #[inline]
            fn find_subrange_in(searcher: &SimdSearcher, haystack: &[Self], needle: &[Self]) -> usize {
                searcher.search(as_bytes(haystack), as_bytes(needle))
            }
        }
    )*};
}

macro_rules! searchable_words {
    ($($ty:ty),*) => {$(
        impl Searchable for $ty {
            #[inline]
            fn find_in(searcher: &SimdSearcher, haystack: &[Self], needle: Self) -> usize {
                searcher.find_u32(as_words(haystack), word_of(needle))
            }

            // A multi-element needle viewed as bytes could match at an offset
            // that is not a multiple of 4, so only single elements are routed
            // to the vector kernels.
            #[inline]
            fn find_subrange_in(searcher: &SimdSearcher, haystack: &[Self], needle: &[Self]) -> usize {
                match needle {
                    [single] if !haystack.is_empty() => Self::find_in(searcher, haystack, *single),
                    _ => scalar::search(haystack, needle),
                }
            }
        }
    )*};
}

macro_rules! searchable_scalar {
    ($($ty:ty),*) => {$(
        impl Searchable for $ty {}
    )*};
}

searchable_bytes!(u8, i8, bool);
searchable_words!(u32, i32, char);
searchable_scalar!(u16, i16, u64, i64, u128, i128, usize, isize, f32, f64);

/// Index of the first element equal to `needle`, or `haystack.len()`
pub fn find<T: Searchable>(haystack: &[T], needle: T) -> usize {
    T::find_in(global_searcher(), haystack, needle)
}

/// Index of the first element contained in `set`, or `haystack.len()`
pub fn find_first_of<T: Searchable>(haystack: &[T], set: &[T]) -> usize {
    T::find_first_of_in(global_searcher(), haystack, set)
}

/// Index of the first occurrence of `needle` as a contiguous run, or
/// `haystack.len()`; an empty needle matches at 0
pub fn find_subrange<T: Searchable>(haystack: &[T], needle: &[T]) -> usize {
    T::find_subrange_in(global_searcher(), haystack, needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::Backend;

    #[test]
    fn test_byte_like_types() {
        let signed: Vec<i8> = (-64..64).collect();
        assert_eq!(find(&signed, -1), 63);
        assert_eq!(find(&signed, 100), signed.len());
        assert_eq!(find_first_of(&signed, &[50, -60]), 4);
        assert_eq!(find_subrange(&signed, &[0, 1, 2, 3]), 64);

        let mut flags = vec![false; 100];
        flags[77] = true;
        assert_eq!(find(&flags, true), 77);
        assert_eq!(find_subrange(&flags, &[false, true]), 76);
    }

    #[test]
    fn test_word_like_types() {
        let words: Vec<i32> = (0..100).map(|i| i * -3).collect();
        assert_eq!(find(&words, -297), 99);
        assert_eq!(find(&words, 1), 100);
        assert_eq!(find_first_of(&words, &[-6, -3]), 1);
        assert_eq!(find_subrange(&words, &[-9]), 3);
        assert_eq!(find_subrange(&words, &[-9, -12]), 3);
        assert_eq!(find_subrange(&words, &[-9, -9]), 100);
        assert_eq!(find_subrange::<i32>(&[], &[1]), 0);

        let text: Vec<char> = "größer als 10€".chars().collect();
        assert_eq!(find(&text, '€'), text.len() - 1);
        assert_eq!(find_subrange(&text, &['a', 'l', 's']), 7);
    }

    #[test]
    fn test_scalar_types() {
        assert_eq!(find(&[1u64, 2, 3], 3), 2);
        assert_eq!(find(&[0.5f64, f64::NAN, 2.0], f64::NAN), 3);
        assert_eq!(find(&[-0.0f32, 1.0], 0.0), 0);
        assert_eq!(find_subrange(&[1u16, 2, 3, 2, 3], &[3, 2]), 2);
        assert_eq!(find_first_of::<usize>(&[4, 5, 6], &[]), 3);
    }

    #[test]
    fn test_matches_scalar_on_every_backend() {
        let data: Vec<i8> = (0..300).map(|i| ((i * 37) % 251) as i8).collect();
        let needle = &data[123..131];
        for backend in Backend::available() {
            let searcher = SimdSearcher::with_backend(backend).unwrap();
            assert_eq!(i8::find_subrange_in(&searcher, &data, needle), scalar::search(&data, needle));
            assert_eq!(i8::find_in(&searcher, &data, data[200]), scalar::find(&data, &data[200]));
        }
    }
}
