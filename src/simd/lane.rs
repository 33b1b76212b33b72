//! Element widths the kernels can be instantiated with.
//!
//! A [`Lane`] picks which broadcast, compare and movemask primitives of a
//! [`Vector`] apply, so `find_lane::<V, Lane8>` is find-byte and
//! `find_lane::<V, Lane32>` is find-int32 from the same source.

use super::vector::Vector;

/// Strategy for one lane width.
///
/// # Safety
///
/// Same contract as [`Vector`]: the methods are only sound when the target
/// features of `V` are enabled in the caller.
pub(crate) trait Lane {
    /// Scalar value occupying one lane
    type Scalar: Copy + Eq + core::fmt::Debug;

    /// Lane width in bytes
    const BYTES: usize;

    /// Broadcast `value` into every lane of this width
    unsafe fn splat<V: Vector>(value: Self::Scalar) -> V;

    /// Lane-wise equality
    unsafe fn cmpeq<V: Vector>(a: V, b: V) -> V;

    /// One bit per lane
    unsafe fn movemask<V: Vector>(v: V) -> u64;

    /// Interpret exactly `BYTES` bytes as a lane value in native byte order,
    /// the same order a vector load gives memory.
    fn from_ne_slice(bytes: &[u8]) -> Self::Scalar;
}

/// 8-bit lanes: bytes
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lane8;

/// 32-bit lanes: int32 elements and 4-byte needles
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lane32;

/// 64-bit lanes: 8-byte needles
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lane64;

impl Lane for Lane8 {
    type Scalar = u8;
    const BYTES: usize = 1;

    #[inline(always)]
    unsafe fn splat<V: Vector>(value: u8) -> V {
        unsafe { V::splat_u8(value) }
    }

    #[inline(always)]
    unsafe fn cmpeq<V: Vector>(a: V, b: V) -> V {
        unsafe { a.cmpeq_u8(b) }
    }

    #[inline(always)]
    unsafe fn movemask<V: Vector>(v: V) -> u64 {
        unsafe { v.movemask_u8() }
    }

    #[inline(always)]
    fn from_ne_slice(bytes: &[u8]) -> u8 {
        bytes[0]
    }
}

impl Lane for Lane32 {
    type Scalar = u32;
    const BYTES: usize = 4;

    #[inline(always)]
    unsafe fn splat<V: Vector>(value: u32) -> V {
        unsafe { V::splat_u32(value) }
    }

    #[inline(always)]
    unsafe fn cmpeq<V: Vector>(a: V, b: V) -> V {
        unsafe { a.cmpeq_u32(b) }
    }

    #[inline(always)]
    unsafe fn movemask<V: Vector>(v: V) -> u64 {
        unsafe { v.movemask_u32() }
    }

    #[inline(always)]
    fn from_ne_slice(bytes: &[u8]) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&bytes[..4]);
        u32::from_ne_bytes(word)
    }
}

impl Lane for Lane64 {
    type Scalar = u64;
    const BYTES: usize = 8;

    #[inline(always)]
    unsafe fn splat<V: Vector>(value: u64) -> V {
        unsafe { V::splat_u64(value) }
    }

    #[inline(always)]
    unsafe fn cmpeq<V: Vector>(a: V, b: V) -> V {
        unsafe { a.cmpeq_u64(b) }
    }

    #[inline(always)]
    unsafe fn movemask<V: Vector>(v: V) -> u64 {
        unsafe { v.movemask_u64() }
    }

    #[inline(always)]
    fn from_ne_slice(bytes: &[u8]) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[..8]);
        u64::from_ne_bytes(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ne_slice_matches_memory_order() {
        let bytes = *b"sentenze";
        assert_eq!(Lane8::from_ne_slice(&bytes), b's');
        assert_eq!(Lane32::from_ne_slice(&bytes).to_ne_bytes(), *b"sent");
        assert_eq!(Lane64::from_ne_slice(&bytes).to_ne_bytes(), bytes);
    }

    #[test]
    fn test_lane_widths() {
        assert_eq!(Lane8::BYTES, 1);
        assert_eq!(Lane32::BYTES, 4);
        assert_eq!(Lane64::BYTES, 8);
    }
}
