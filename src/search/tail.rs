//! Partial-vector handling for the end of a haystack.
//!
//! A remainder shorter than one register is copied into a stack buffer that
//! was first filled with a known pattern, and the buffer is loaded as a full
//! vector. Nothing past the end of the haystack is ever read.
//!
//! - Single value and set searches fill with the needle itself, so padding
//!   lanes always match and the first set bit is at most the remainder
//!   length. Clamping to that length turns "only padding matched" into the
//!   not-found sentinel.
//! - Window searches fill with zeros and mask off every lane whose window
//!   would start past the last valid start, so padding can never produce a
//!   match whatever the needle bytes are.

use crate::simd::Vector;

/// Large enough for the widest register (512 bits).
const TAIL_BYTES: usize = 64;

#[repr(C, align(64))]
struct TailBuffer([u8; TAIL_BYTES]);

/// Load `len` bytes from `src` into a vector whose remaining bytes come from
/// `fill`.
///
/// # Safety
///
/// `len <= V::BYTES` and `src` must be readable for `len` bytes. The target
/// features of `V` must be enabled.
#[inline(always)]
pub(crate) unsafe fn load_padded<V: Vector>(src: *const u8, len: usize, fill: V) -> V {
    debug_assert!(len <= V::BYTES && V::BYTES <= TAIL_BYTES);
    let mut buf = TailBuffer([0; TAIL_BYTES]);
    unsafe {
        fill.store_unaligned(buf.0.as_mut_ptr());
        core::ptr::copy_nonoverlapping(src, buf.0.as_mut_ptr(), len);
        V::load_unaligned(buf.0.as_ptr())
    }
}

/// Load `len` bytes from `src`, zero-filling the rest of the register.
///
/// # Safety
///
/// Same as [`load_padded`].
#[inline(always)]
pub(crate) unsafe fn load_zero_padded<V: Vector>(src: *const u8, len: usize) -> V {
    debug_assert!(len <= V::BYTES && V::BYTES <= TAIL_BYTES);
    let mut buf = TailBuffer([0; TAIL_BYTES]);
    unsafe {
        core::ptr::copy_nonoverlapping(src, buf.0.as_mut_ptr(), len);
        V::load_unaligned(buf.0.as_ptr())
    }
}

/// Offset of the first match in a padded tail, clamped to the number of real
/// lanes `remaining`.
#[inline(always)]
pub(crate) fn clamp_match(mask: u64, remaining: usize) -> usize {
    (mask.trailing_zeros() as usize).min(remaining)
}

/// A mask with the low `lanes` bits set.
#[inline(always)]
pub(crate) fn low_lanes(lanes: usize) -> u64 {
    if lanes >= 64 {
        u64::MAX
    } else {
        (1u64 << lanes) - 1
    }
}
