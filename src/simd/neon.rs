//! [`Vector`] implementation for AArch64 Advanced SIMD.
//!
//! NEON has no movemask instruction. The sign bit of each lane is isolated,
//! shifted left by its lane index inside a half register, and the halves are
//! summed across lanes.

use core::arch::aarch64::*;

use super::vector::Vector;

const BYTE_SHIFTS: [i8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7];
const WORD_SHIFTS: [i32; 4] = [0, 1, 2, 3];
const DWORD_SHIFTS: [i64; 2] = [0, 1];

impl Vector for uint8x16_t {
    const BYTES: usize = 16;

    #[inline(always)]
    unsafe fn splat_u8(byte: u8) -> uint8x16_t {
        unsafe { vdupq_n_u8(byte) }
    }

    #[inline(always)]
    unsafe fn splat_u32(word: u32) -> uint8x16_t {
        unsafe { vreinterpretq_u8_u32(vdupq_n_u32(word)) }
    }

    #[inline(always)]
    unsafe fn splat_u64(word: u64) -> uint8x16_t {
        unsafe { vreinterpretq_u8_u64(vdupq_n_u64(word)) }
    }

    #[inline(always)]
    unsafe fn load_unaligned(data: *const u8) -> uint8x16_t {
        unsafe { vld1q_u8(data) }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, data: *mut u8) {
        unsafe { vst1q_u8(data, self) }
    }

    #[inline(always)]
    unsafe fn cmpeq_u8(self, other: Self) -> uint8x16_t {
        unsafe { vceqq_u8(self, other) }
    }

    #[inline(always)]
    unsafe fn cmpeq_u32(self, other: Self) -> uint8x16_t {
        unsafe {
            vreinterpretq_u8_u32(vceqq_u32(
                vreinterpretq_u32_u8(self),
                vreinterpretq_u32_u8(other),
            ))
        }
    }

    #[inline(always)]
    unsafe fn cmpeq_u64(self, other: Self) -> uint8x16_t {
        unsafe {
            vreinterpretq_u8_u64(vceqq_u64(
                vreinterpretq_u64_u8(self),
                vreinterpretq_u64_u8(other),
            ))
        }
    }

    #[inline(always)]
    unsafe fn or(self, other: Self) -> uint8x16_t {
        unsafe { vorrq_u8(self, other) }
    }

    #[inline(always)]
    unsafe fn movemask_u8(self) -> u64 {
        unsafe {
            let high_bits = vshrq_n_u8::<7>(self);
            let shifted = vshlq_u8(high_bits, vld1q_s8(BYTE_SHIFTS.as_ptr()));
            let low = vaddv_u8(vget_low_u8(shifted)) as u64;
            let high = vaddv_u8(vget_high_u8(shifted)) as u64;
            low | (high << 8)
        }
    }

    #[inline(always)]
    unsafe fn movemask_u32(self) -> u64 {
        unsafe {
            let high_bits = vshrq_n_u32::<31>(vreinterpretq_u32_u8(self));
            let shifted = vshlq_u32(high_bits, vld1q_s32(WORD_SHIFTS.as_ptr()));
            vaddvq_u32(shifted) as u64
        }
    }

    #[inline(always)]
    unsafe fn movemask_u64(self) -> u64 {
        unsafe {
            let high_bits = vshrq_n_u64::<63>(vreinterpretq_u64_u8(self));
            let shifted = vshlq_u64(high_bits, vld1q_s64(DWORD_SHIFTS.as_ptr()));
            vaddvq_u64(shifted)
        }
    }
}
