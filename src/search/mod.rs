//! # Vectorized search
//!
//! Leftmost-match search over contiguous slices. Every operation returns an
//! offset in `0..=len`, with `len` meaning "not found".
//!
//! ## Layout
//!
//! - [`scalar`]: linear scans, the reference every backend must match
//! - `kernels`: find, find-first-of and window search written once over
//!   [`Vector`](crate::simd) and lane width
//! - `tail`: padded loads for the last partial register
//! - `backend`: `#[target_feature]` instantiations and routing
//! - [`searcher`]: backend selection and the [`SimdSearcher`] surface
//! - [`generic`]: entry points over any [`Searchable`] element type
//!
//! ## Vectorized paths
//!
//! | Operation | Lanes | Fallback |
//! |---|---|---|
//! | find byte | 8-bit, 4 registers per iteration | none |
//! | find int32 | 32-bit, 4 registers per iteration | none |
//! | find first of | 8-bit, one compare per set value | sets over 16 bytes |
//! | search, 4-byte needle | 32-bit, 4 staggered loads | none |
//! | search, 8-byte needle | 64-bit, 8 staggered loads | none |
//! | search, other lengths | none | linear scan |

pub mod generic;
pub mod scalar;
pub mod searcher;

pub(crate) mod backend;
pub(crate) mod kernels;
pub(crate) mod tail;

pub use generic::Searchable;
pub use kernels::MAX_FIRST_OF_SET;
pub use searcher::{find_byte, find_first_of, find_i32, find_u32, global_searcher, search, SimdSearcher};
