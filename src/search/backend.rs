//! Per-ISA entry points and the routing from a [`Backend`] value to them.

use super::kernels::MAX_FIRST_OF_SET;
use super::scalar;
use crate::simd::macros::vector_backend;
use crate::simd::Backend;

vector_backend!(
    #[cfg(lanescan_simd_x86)]
    sse41, core::arch::x86_64::__m128i, "sse4.1"
);

vector_backend!(
    #[cfg(lanescan_simd_x86)]
    avx2, core::arch::x86_64::__m256i, "avx2"
);

vector_backend!(
    #[cfg(lanescan_avx512)]
    avx512, core::arch::x86_64::__m512i, "avx512f,avx512bw"
);

vector_backend!(
    #[cfg(lanescan_simd_neon)]
    neon, core::arch::aarch64::uint8x16_t, "neon"
);

/// Call `$func` on the module for `$backend`, or evaluate `$fallback` for
/// `Scalar` and for backends not compiled into this build.
macro_rules! route {
    ($backend:expr, $func:ident($($arg:expr),*), $fallback:expr) => {
        match $backend {
            #[cfg(lanescan_simd_x86)]
            Backend::Sse41 => unsafe { sse41::$func($($arg),*) },
            #[cfg(lanescan_simd_x86)]
            Backend::Avx2 => unsafe { avx2::$func($($arg),*) },
            #[cfg(lanescan_avx512)]
            Backend::Avx512 => unsafe { avx512::$func($($arg),*) },
            #[cfg(lanescan_simd_neon)]
            Backend::Neon => unsafe { neon::$func($($arg),*) },
            _ => $fallback,
        }
    };
}

// Safety for every function below: `backend.is_supported()` must hold.
// `SimdSearcher` only stores backends that passed that check.

/// # Safety
///
/// `backend` must be supported by the running CPU.
#[inline]
pub(crate) unsafe fn find_u8(backend: Backend, haystack: &[u8], needle: u8) -> usize {
    route!(backend, find_u8(haystack, needle), scalar::find(haystack, &needle))
}

/// # Safety
///
/// `backend` must be supported by the running CPU.
#[inline]
pub(crate) unsafe fn find_u32(backend: Backend, haystack: &[u32], needle: u32) -> usize {
    route!(backend, find_u32(haystack, needle), scalar::find(haystack, &needle))
}

/// # Safety
///
/// `backend` must be supported by the running CPU.
#[inline]
pub(crate) unsafe fn find_first_of(backend: Backend, haystack: &[u8], set: &[u8]) -> usize {
    if set.is_empty() || set.len() > MAX_FIRST_OF_SET {
        return scalar::find_first_of(haystack, set);
    }
    route!(backend, find_first_of(haystack, set), scalar::find_first_of(haystack, set))
}

/// # Safety
///
/// `backend` must be supported by the running CPU, and `needle.len()` must
/// be 4.
#[inline]
pub(crate) unsafe fn search4(backend: Backend, haystack: &[u8], needle: &[u8]) -> usize {
    route!(backend, search4(haystack, needle), scalar::search(haystack, needle))
}

/// # Safety
///
/// `backend` must be supported by the running CPU, and `needle.len()` must
/// be 8.
#[inline]
pub(crate) unsafe fn search8(backend: Backend, haystack: &[u8], needle: &[u8]) -> usize {
    route!(backend, search8(haystack, needle), scalar::search(haystack, needle))
}
