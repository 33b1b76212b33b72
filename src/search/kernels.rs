//! Width-generic search kernels.
//!
//! Each kernel is written once against [`Vector`] and [`Lane`] and
//! instantiated per instruction set by [`vector_backend!`]. They are all
//! `#[inline(always)]` so the intrinsics end up inside the
//! `#[target_feature]` entry point that calls them.
//!
//! [`vector_backend!`]: crate::simd::macros::vector_backend

use super::tail;
use crate::simd::{Lane, Vector};

/// Chunks compared per iteration of the find loop
const UNROLL: usize = 4;

/// Largest byte set [`find_first_of`] vectorizes
pub const MAX_FIRST_OF_SET: usize = 16;

/// Index of the first element equal to `needle` among `len` elements of
/// width `E::BYTES` starting at `start`, or `len`.
///
/// # Safety
///
/// `start` must be readable for `len * E::BYTES` bytes and the target
/// features of `V` must be enabled.
#[inline(always)]
pub(crate) unsafe fn find_lane<V: Vector, E: Lane>(start: *const u8, len: usize, needle: E::Scalar) -> usize {
    let lanes = V::BYTES / E::BYTES;
    let mut i = 0;

    unsafe {
        let splat = E::splat::<V>(needle);

        while i + UNROLL * lanes <= len {
            let p = start.add(i * E::BYTES);
            let a = E::cmpeq(V::load_unaligned(p), splat);
            let b = E::cmpeq(V::load_unaligned(p.add(V::BYTES)), splat);
            let c = E::cmpeq(V::load_unaligned(p.add(2 * V::BYTES)), splat);
            let d = E::cmpeq(V::load_unaligned(p.add(3 * V::BYTES)), splat);

            if E::movemask(a.or(b).or(c.or(d))) != 0 {
                let mut offset = i;
                for eq in [a, b, c, d] {
                    let mask = E::movemask(eq);
                    if mask != 0 {
                        return offset + mask.trailing_zeros() as usize;
                    }
                    offset += lanes;
                }
            }
            i += UNROLL * lanes;
        }

        while i + lanes <= len {
            let chunk = V::load_unaligned(start.add(i * E::BYTES));
            let mask = E::movemask(E::cmpeq(chunk, splat));
            if mask != 0 {
                return i + mask.trailing_zeros() as usize;
            }
            i += lanes;
        }

        if i == len {
            return len;
        }

        let remaining = len - i;
        let chunk = tail::load_padded::<V>(start.add(i * E::BYTES), remaining * E::BYTES, splat);
        i + tail::clamp_match(E::movemask(E::cmpeq(chunk, splat)), remaining)
    }
}

/// Offset of the first byte of `haystack` contained in `set`, or
/// `haystack.len()`.
///
/// # Safety
///
/// `set` must hold between 1 and [`MAX_FIRST_OF_SET`] bytes and the target
/// features of `V` must be enabled.
#[inline(always)]
pub(crate) unsafe fn find_first_of<V: Vector>(haystack: &[u8], set: &[u8]) -> usize {
    debug_assert!(!set.is_empty() && set.len() <= MAX_FIRST_OF_SET);
    let len = haystack.len();
    let start = haystack.as_ptr();
    let mut i = 0;

    unsafe {
        let mut splats = [V::splat_u8(set[0]); MAX_FIRST_OF_SET];
        for (slot, &value) in splats.iter_mut().zip(set) {
            *slot = V::splat_u8(value);
        }
        let splats = &splats[..set.len()];

        while i + V::BYTES <= len {
            let mask = match_any(V::load_unaligned(start.add(i)), splats);
            if mask != 0 {
                return i + mask.trailing_zeros() as usize;
            }
            i += V::BYTES;
        }

        if i == len {
            return len;
        }

        // padding repeats set[0], which is in the set
        let remaining = len - i;
        let chunk = tail::load_padded::<V>(start.add(i), remaining, splats[0]);
        i + tail::clamp_match(match_any(chunk, splats), remaining)
    }
}

#[inline(always)]
unsafe fn match_any<V: Vector>(chunk: V, splats: &[V]) -> u64 {
    unsafe {
        let mut acc = chunk.cmpeq_u8(splats[0]);
        for &splat in &splats[1..] {
            acc = acc.or(chunk.cmpeq_u8(splat));
        }
        acc.movemask_u8()
    }
}

/// Offset of the first `E::BYTES`-byte window of `haystack` equal to
/// `needle`, or `haystack.len()`.
///
/// The needle is read as one lane value. Each step issues `E::BYTES` loads
/// at byte offsets `p, p + 1, ..`; lane `m` of load `j` is the window
/// starting at `p + j + m * E::BYTES`, so one step covers every start in
/// `p..p + V::BYTES` and the earliest is the minimum of
/// `j + E::BYTES * trailing_zeros(mask_j)`.
///
/// # Safety
///
/// `needle.len() == E::BYTES` and the target features of `V` must be
/// enabled.
#[inline(always)]
pub(crate) unsafe fn search_window<V: Vector, E: Lane>(haystack: &[u8], needle: &[u8]) -> usize {
    let width = E::BYTES;
    debug_assert_eq!(needle.len(), width);
    let len = haystack.len();
    if len < width {
        return len;
    }

    let lanes = V::BYTES / width;
    let last_start = len - width;
    let start = haystack.as_ptr();
    let mut p = 0;

    unsafe {
        let splat = E::splat::<V>(E::from_ne_slice(needle));

        while p + width - 1 + V::BYTES <= len {
            let mut best = usize::MAX;
            for j in 0..width {
                let mask = E::movemask(E::cmpeq(V::load_unaligned(start.add(p + j)), splat));
                if mask != 0 {
                    best = best.min(j + width * mask.trailing_zeros() as usize);
                }
            }
            if best != usize::MAX {
                return p + best;
            }
            p += V::BYTES;
        }

        // fewer than V::BYTES starts remain
        let mut best = usize::MAX;
        for j in 0..width {
            let at = p + j;
            if at > last_start {
                break;
            }
            let valid = ((last_start - at) / width + 1).min(lanes);
            let chunk = tail::load_zero_padded::<V>(start.add(at), (len - at).min(V::BYTES));
            let mask = E::movemask(E::cmpeq(chunk, splat)) & tail::low_lanes(valid);
            if mask != 0 {
                best = best.min(j + width * mask.trailing_zeros() as usize);
            }
        }

        if best == usize::MAX {
            len
        } else {
            p + best
        }
    }
}
