//! # Lanescan: SIMD-Accelerated Byte and Word Search
//!
//! Drop-in replacements for the linear `find`, `find_first_of` and `search`
//! scans over contiguous slices, vectorized with SSE4.1, AVX2, AVX-512 or
//! NEON and chosen at runtime for the CPU the program runs on.
//!
//! ## Key Features
//!
//! - **Exact semantics**: leftmost match, `len` as the not-found sentinel,
//!   identical results on every backend
//! - **One algorithm, every width**: kernels are generic over the register
//!   type and lane width
//! - **Safe tails**: the last partial register is read through a padded
//!   stack copy, never past the end of the slice
//! - **Runtime dispatch**: widest supported backend by default, with
//!   overrides from code, environment, or build time
//!
//! ## Quick Start
//!
//! ```rust
//! use lanescan::{find_byte, find_first_of, search, SimdSearcher};
//!
//! let text = b"more stuff here to fill in. hello world! This is a sentenze";
//!
//! assert_eq!(find_byte(text, b'!'), 39);
//! assert_eq!(find_first_of(text, b"azxy"), 49);
//! assert_eq!(search(text, b"sentenze"), 51);
//! assert_eq!(search(text, b"absent"), text.len());
//!
//! // Pin a backend explicitly
//! let scalar = SimdSearcher::scalar();
//! assert_eq!(scalar.search(text, b"worl"), 34);
//! ```
//!
//! ## Backend Overrides
//!
//! | Where | How |
//! |---|---|
//! | code | [`SimdSearcher::with_config`], [`SimdSearcher::with_backend`] |
//! | environment | `LANESCAN_SIMD_WIDTH=128\|256\|512\|scalar`, `LANESCAN_SIMD_ENABLE`, `LANESCAN_SIMD_AVX2`, ... |
//! | build | `LANESCAN_BUILD_WIDTH=...` while compiling, or disabling the `simd` feature |

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(lanescan_scalar_only, allow(dead_code, unused_imports))]

pub mod config;
pub mod error;
pub mod search;
pub mod simd;
pub mod system;

pub use config::{Config, SearchConfig};
pub use error::{Result, ScanError};
pub use search::generic::{find, find_subrange, Searchable};
pub use search::{
    find_byte, find_first_of, find_i32, find_u32, global_searcher, search, SimdSearcher,
    MAX_FIRST_OF_SET,
};
pub use simd::{Backend, VectorWidth};
pub use system::{get_cpu_features, CpuFeatures};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library: logs the version and the selected search backend.
///
/// Calling it is optional; the global searcher is built lazily on first use.
pub fn init() {
    log::debug!("Initializing lanescan v{}", VERSION);
    log::debug!("Global search backend: {}", global_searcher().backend());
}
