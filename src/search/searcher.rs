//! Backend selection and the public search surface.

use std::sync::OnceLock;

use log::{debug, warn};

use super::{backend, scalar};
use crate::config::{Config, SearchConfig};
use crate::error::{Result, ScanError};
use crate::simd::{Backend, VectorWidth};
use crate::system::cpu_features::get_cpu_features;

/// Backend pin captured by `build.rs` from `LANESCAN_BUILD_WIDTH`
const BUILD_PIN: Option<&str> = option_env!("LANESCAN_BUILD_BACKEND");

/// Vectorized search bound to one backend.
///
/// The backend is checked against the running CPU when the searcher is built,
/// so every method is safe to call. Searches never fail: a missing needle is
/// reported as the haystack length.
///
/// # Example
///
/// ```
/// use lanescan::SimdSearcher;
///
/// let searcher = SimdSearcher::new();
/// let haystack = b"hello world";
/// assert_eq!(searcher.find_byte(haystack, b'w'), 6);
/// assert_eq!(searcher.find_byte(haystack, b'z'), haystack.len());
/// assert_eq!(searcher.search(haystack, b"worl"), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimdSearcher {
    backend: Backend,
}

impl SimdSearcher {
    /// Create a searcher using the default configuration.
    ///
    /// A build-time pin the CPU cannot honor is logged and replaced by
    /// auto-detection.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default()).unwrap_or_else(|e| {
            warn!("falling back to detected search backend: {}", e);
            Self::detected()
        })
    }

    /// Create a searcher from an explicit configuration.
    ///
    /// Fails with `Configuration` if the config is invalid and `NotSupported`
    /// if it pins a backend this build or CPU lacks.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        let backend = select_backend(&config)?;
        debug!("search backend {} on {}", backend, get_cpu_features());
        Ok(Self { backend })
    }

    /// Create a searcher using exactly `backend`.
    pub fn with_backend(backend: Backend) -> Result<Self> {
        Ok(Self { backend: backend.ensure_supported()? })
    }

    /// Searcher using the widest supported backend, ignoring configuration
    pub fn detected() -> Self {
        Self { backend: Backend::detect() }
    }

    /// Searcher that never uses vector code
    pub fn scalar() -> Self {
        Self { backend: Backend::Scalar }
    }

    /// Active backend
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Active register width, `None` when scalar
    pub fn width(&self) -> Option<VectorWidth> {
        self.backend.width()
    }

    /// Offset of the first byte equal to `needle`, or `haystack.len()`.
    #[inline]
    pub fn find_byte(&self, haystack: &[u8], needle: u8) -> usize {
        if haystack.is_empty() {
            return 0;
        }
        unsafe { backend::find_u8(self.backend, haystack, needle) }
    }

    /// Index of the first element equal to `needle`, or `haystack.len()`.
    #[inline]
    pub fn find_u32(&self, haystack: &[u32], needle: u32) -> usize {
        if haystack.is_empty() {
            return 0;
        }
        unsafe { backend::find_u32(self.backend, haystack, needle) }
    }

    /// Index of the first element equal to `needle`, or `haystack.len()`.
    #[inline]
    pub fn find_i32(&self, haystack: &[i32], needle: i32) -> usize {
        if haystack.is_empty() {
            return 0;
        }
        // i32 and u32 share size, alignment and every bit pattern
        let words = unsafe { std::slice::from_raw_parts(haystack.as_ptr().cast::<u32>(), haystack.len()) };
        unsafe { backend::find_u32(self.backend, words, needle as u32) }
    }

    /// Offset of the first byte contained in `set`, or `haystack.len()`.
    ///
    /// Sets of up to [`MAX_FIRST_OF_SET`](crate::MAX_FIRST_OF_SET) bytes are
    /// vectorized; larger sets use a linear scan. An empty set never matches.
    #[inline]
    pub fn find_first_of(&self, haystack: &[u8], set: &[u8]) -> usize {
        if haystack.is_empty() {
            return 0;
        }
        unsafe { backend::find_first_of(self.backend, haystack, set) }
    }

    /// Offset of the first occurrence of `needle`, or `haystack.len()`.
    ///
    /// Needles of 1, 4 and 8 bytes are vectorized, any other length uses a
    /// linear scan. An empty needle matches at 0.
    #[inline]
    pub fn search(&self, haystack: &[u8], needle: &[u8]) -> usize {
        if needle.is_empty() {
            return 0;
        }
        if needle.len() > haystack.len() {
            return haystack.len();
        }
        match needle.len() {
            1 => unsafe { backend::find_u8(self.backend, haystack, needle[0]) },
            4 => unsafe { backend::search4(self.backend, haystack, needle) },
            8 => unsafe { backend::search8(self.backend, haystack, needle) },
            _ => scalar::search(haystack, needle),
        }
    }

    /// Like [`search`](Self::search) for callers that only ever pass 1, 4 or
    /// 8 byte needles.
    ///
    /// Any other length is a caller bug: it panics in debug builds and falls
    /// back to a linear scan in release builds.
    #[inline]
    pub fn search_fixed(&self, haystack: &[u8], needle: &[u8]) -> usize {
        debug_assert!(
            matches!(needle.len(), 1 | 4 | 8),
            "search_fixed needle must be 1, 4 or 8 bytes, got {}",
            needle.len()
        );
        self.search(haystack, needle)
    }
}

impl Default for SimdSearcher {
    fn default() -> Self {
        Self::new()
    }
}

enum Pin {
    Scalar,
    Width(VectorWidth),
}

fn build_pin() -> Result<Option<Pin>> {
    match BUILD_PIN {
        None => Ok(None),
        Some("scalar") => Ok(Some(Pin::Scalar)),
        Some(width) => Ok(Some(Pin::Width(width.parse()?))),
    }
}

fn pinned_backend(width: VectorWidth, config: &SearchConfig) -> Result<Backend> {
    let backend = width
        .backend()
        .ok_or_else(|| ScanError::not_supported(format!("{}-bit vectors on this architecture", width.bits())))?;
    if !config.allows(backend) {
        return Err(ScanError::configuration(format!(
            "{}-bit vectors pinned but the {} backend is disabled",
            width.bits(),
            backend.name()
        )));
    }
    backend.ensure_supported()
}

/// Pick a backend for `config`.
///
/// Order: the config's own pin or SIMD switch, then the build-time pin, then
/// the `simd` cargo feature, then the widest supported backend the config
/// allows.
pub(crate) fn select_backend(config: &SearchConfig) -> Result<Backend> {
    config.validate()?;

    if !config.enable_simd {
        return Ok(Backend::Scalar);
    }
    if let Some(width) = config.pinned_width {
        return pinned_backend(width, config);
    }

    match build_pin()? {
        Some(Pin::Scalar) => return Ok(Backend::Scalar),
        Some(Pin::Width(width)) => return pinned_backend(width, config),
        None => {}
    }

    if !cfg!(feature = "simd") {
        return Ok(Backend::Scalar);
    }

    Ok(Backend::PREFERENCE
        .into_iter()
        .find(|backend| config.allows(*backend) && backend.is_supported())
        .unwrap_or(Backend::Scalar))
}

static GLOBAL_SEARCHER: OnceLock<SimdSearcher> = OnceLock::new();

/// The process-wide searcher, configured once from `LANESCAN_*` environment
/// variables.
///
/// An invalid or unsupported override is logged and replaced by
/// auto-detection.
pub fn global_searcher() -> &'static SimdSearcher {
    GLOBAL_SEARCHER.get_or_init(|| {
        SearchConfig::from_env()
            .and_then(SimdSearcher::with_config)
            .unwrap_or_else(|e| {
                warn!("ignoring search backend override: {}", e);
                SimdSearcher::detected()
            })
    })
}

/// [`SimdSearcher::find_byte`] on the global searcher
pub fn find_byte(haystack: &[u8], needle: u8) -> usize {
    global_searcher().find_byte(haystack, needle)
}

/// [`SimdSearcher::find_u32`] on the global searcher
pub fn find_u32(haystack: &[u32], needle: u32) -> usize {
    global_searcher().find_u32(haystack, needle)
}

/// [`SimdSearcher::find_i32`] on the global searcher
pub fn find_i32(haystack: &[i32], needle: i32) -> usize {
    global_searcher().find_i32(haystack, needle)
}

/// [`SimdSearcher::find_first_of`] on the global searcher
pub fn find_first_of(haystack: &[u8], set: &[u8]) -> usize {
    global_searcher().find_first_of(haystack, set)
}

/// [`SimdSearcher::search`] on the global searcher
pub fn search(haystack: &[u8], needle: &[u8]) -> usize {
    global_searcher().search(haystack, needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searchers() -> Vec<SimdSearcher> {
        Backend::available()
            .into_iter()
            .map(|backend| SimdSearcher::with_backend(backend).unwrap())
            .collect()
    }

    #[test]
    fn test_new_uses_supported_backend() {
        let searcher = SimdSearcher::new();
        assert!(searcher.backend().is_supported());
        assert_eq!(searcher.width(), searcher.backend().width());
    }

    #[test]
    fn test_scalar_config() {
        let searcher = SimdSearcher::with_config(SearchConfig::scalar_preset()).unwrap();
        assert_eq!(searcher.backend(), Backend::Scalar);
        assert_eq!(searcher, SimdSearcher::scalar());
    }

    #[test]
    fn test_custom_config_toggles() {
        let config = SearchConfig {
            enable_sse41: false,
            enable_avx2: false,
            enable_avx512: false,
            enable_neon: false,
            ..SearchConfig::default()
        };
        let searcher = SimdSearcher::with_config(config).unwrap();
        assert_eq!(searcher.backend(), Backend::Scalar);
    }

    #[test]
    fn test_pinned_width() {
        for width in VectorWidth::ALL {
            let result = SimdSearcher::with_config(SearchConfig::pinned(width));
            match width.backend() {
                Some(backend) if backend.is_supported() => {
                    assert_eq!(result.unwrap().backend(), backend);
                }
                _ => assert_eq!(result.unwrap_err().category(), "unsupported"),
            }
        }
    }

    #[test]
    fn test_with_backend_rejects_unsupported() {
        for backend in Backend::PREFERENCE {
            let result = SimdSearcher::with_backend(backend);
            assert_eq!(result.is_ok(), backend.is_supported());
        }
    }

    #[test]
    fn test_find_byte_basic() {
        for searcher in searchers() {
            assert_eq!(searcher.find_byte(b"hello", b'h'), 0);
            assert_eq!(searcher.find_byte(b"hello", b'o'), 4);
            assert_eq!(searcher.find_byte(b"hello", b'x'), 5);
            assert_eq!(searcher.find_byte(b"", b'a'), 0);
        }
    }

    #[test]
    fn test_find_i32_negative_values() {
        let data: Vec<i32> = (-100..100).collect();
        for searcher in searchers() {
            assert_eq!(searcher.find_i32(&data, -100), 0);
            assert_eq!(searcher.find_i32(&data, -1), 99);
            assert_eq!(searcher.find_i32(&data, 99), 199);
            assert_eq!(searcher.find_i32(&data, 500), 200);
            assert_eq!(searcher.find_i32(&[], 1), 0);
        }
    }

    #[test]
    fn test_search_lengths() {
        let text = b"more stuff here to fill in. hello world! This is a sentenze";
        for searcher in searchers() {
            assert_eq!(searcher.search(text, b""), 0);
            assert_eq!(searcher.search(text, b"h"), 11);
            assert_eq!(searcher.search(text, b"sent"), 51);
            assert_eq!(searcher.search(text, b"sentenze"), 51);
            assert_eq!(searcher.search(text, b"hello"), 28);
            assert_eq!(searcher.search(b"abc", b"abcdefgh"), 3);
            assert_eq!(searcher.search(b"", b"a"), 0);
        }
    }

    #[test]
    fn test_search_fixed_supported_lengths() {
        for searcher in searchers() {
            assert_eq!(searcher.search_fixed(b"xxabcdxx", b"abcd"), 2);
            assert_eq!(searcher.search_fixed(b"xxabcdxx", b"d"), 5);
            assert_eq!(searcher.search_fixed(b"xxabcdefgh", b"abcdefgh"), 2);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "search_fixed needle must be 1, 4 or 8 bytes")]
    fn test_search_fixed_rejects_other_lengths() {
        SimdSearcher::new().search_fixed(b"hello world", b"wor");
    }

    #[test]
    fn test_global_functions() {
        assert!(global_searcher().backend().is_supported());
        assert_eq!(find_byte(b"hello", b'l'), 2);
        assert_eq!(find_u32(&[1, 2, 3], 3), 2);
        assert_eq!(find_i32(&[1, -2, 3], -2), 1);
        assert_eq!(find_first_of(b"hello", b"ol"), 2);
        assert_eq!(search(b"hello world", b"o wo"), 4);
    }
}
