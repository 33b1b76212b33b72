//! Code generation for per-ISA search entry points.
//!
//! The kernels in [`crate::search::kernels`] are generic and
//! `#[inline(always)]`. A backend is a module of thin
//! `#[target_feature(enable = ...)]` functions that instantiate those kernels
//! with one register type, so the intrinsics inline into code compiled for
//! that instruction set.
//!
//! ```ignore
//! vector_backend!(
//!     #[cfg(lanescan_simd_x86)]
//!     avx2, core::arch::x86_64::__m256i, "avx2"
//! );
//! // expands to `mod avx2 { pub(crate) unsafe fn find_u8(..) .. search8(..) }`
//! ```

/// Generate a backend module with the five vectorized entry points.
///
/// Every generated function is `unsafe`: the caller must have verified that
/// the running CPU supports the named target features.
macro_rules! vector_backend {
    ($(#[$attr:meta])* $name:ident, $vector:ty, $features:tt) => {
        $(#[$attr])*
        pub(crate) mod $name {
            use crate::search::kernels;
            use crate::simd::{Lane32, Lane64, Lane8};

            /// Offset of the first `needle` byte, or `haystack.len()`
            #[target_feature(enable = $features)]
            pub(crate) unsafe fn find_u8(haystack: &[u8], needle: u8) -> usize {
                unsafe { kernels::find_lane::<$vector, Lane8>(haystack.as_ptr(), haystack.len(), needle) }
            }

            /// Index of the first `needle` word, or `haystack.len()`
            #[target_feature(enable = $features)]
            pub(crate) unsafe fn find_u32(haystack: &[u32], needle: u32) -> usize {
                unsafe {
                    kernels::find_lane::<$vector, Lane32>(haystack.as_ptr().cast(), haystack.len(), needle)
                }
            }

            /// Offset of the first byte found in `set` (1..=16 values)
            #[target_feature(enable = $features)]
            pub(crate) unsafe fn find_first_of(haystack: &[u8], set: &[u8]) -> usize {
                unsafe { kernels::find_first_of::<$vector>(haystack, set) }
            }

            /// Offset of the first 4-byte window equal to `needle`
            #[target_feature(enable = $features)]
            pub(crate) unsafe fn search4(haystack: &[u8], needle: &[u8]) -> usize {
                unsafe { kernels::search_window::<$vector, Lane32>(haystack, needle) }
            }

            /// Offset of the first 8-byte window equal to `needle`
            #[target_feature(enable = $features)]
            pub(crate) unsafe fn search8(haystack: &[u8], needle: &[u8]) -> usize {
                unsafe { kernels::search_window::<$vector, Lane64>(haystack, needle) }
            }
        }
    };
}

pub(crate) use vector_backend;
