//! [`Vector`] implementations for x86_64.
//!
//! - `__m128i`: SSE4.1 (`pcmpeqq` is the only instruction beyond SSE2)
//! - `__m256i`: AVX2
//! - `__m512i`: AVX-512F + AVX-512BW, behind the `avx512` feature

use super::vector::Vector;

mod sse41 {
    use core::arch::x86_64::*;

    use super::Vector;

    impl Vector for __m128i {
        const BYTES: usize = 16;

        #[inline(always)]
        unsafe fn splat_u8(byte: u8) -> __m128i {
            unsafe { _mm_set1_epi8(byte as i8) }
        }

        #[inline(always)]
        unsafe fn splat_u32(word: u32) -> __m128i {
            unsafe { _mm_set1_epi32(word as i32) }
        }

        #[inline(always)]
        unsafe fn splat_u64(word: u64) -> __m128i {
            unsafe { _mm_set1_epi64x(word as i64) }
        }

        #[inline(always)]
        unsafe fn load_unaligned(data: *const u8) -> __m128i {
            unsafe { _mm_loadu_si128(data.cast()) }
        }

        #[inline(always)]
        unsafe fn store_unaligned(self, data: *mut u8) {
            unsafe { _mm_storeu_si128(data.cast(), self) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u8(self, other: Self) -> __m128i {
            unsafe { _mm_cmpeq_epi8(self, other) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u32(self, other: Self) -> __m128i {
            unsafe { _mm_cmpeq_epi32(self, other) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u64(self, other: Self) -> __m128i {
            unsafe { _mm_cmpeq_epi64(self, other) }
        }

        #[inline(always)]
        unsafe fn or(self, other: Self) -> __m128i {
            unsafe { _mm_or_si128(self, other) }
        }

        #[inline(always)]
        unsafe fn movemask_u8(self) -> u64 {
            unsafe { _mm_movemask_epi8(self) as u32 as u64 }
        }

        #[inline(always)]
        unsafe fn movemask_u32(self) -> u64 {
            unsafe { _mm_movemask_ps(_mm_castsi128_ps(self)) as u32 as u64 }
        }

        #[inline(always)]
        unsafe fn movemask_u64(self) -> u64 {
            unsafe { _mm_movemask_pd(_mm_castsi128_pd(self)) as u32 as u64 }
        }
    }
}

mod avx2 {
    use core::arch::x86_64::*;

    use super::Vector;

    impl Vector for __m256i {
        const BYTES: usize = 32;

        #[inline(always)]
        unsafe fn splat_u8(byte: u8) -> __m256i {
            unsafe { _mm256_set1_epi8(byte as i8) }
        }

        #[inline(always)]
        unsafe fn splat_u32(word: u32) -> __m256i {
            unsafe { _mm256_set1_epi32(word as i32) }
        }

        #[inline(always)]
        unsafe fn splat_u64(word: u64) -> __m256i {
            unsafe { _mm256_set1_epi64x(word as i64) }
        }

        #[inline(always)]
        unsafe fn load_unaligned(data: *const u8) -> __m256i {
            unsafe { _mm256_loadu_si256(data.cast()) }
        }

        #[inline(always)]
        unsafe fn store_unaligned(self, data: *mut u8) {
            unsafe { _mm256_storeu_si256(data.cast(), self) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u8(self, other: Self) -> __m256i {
            unsafe { _mm256_cmpeq_epi8(self, other) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u32(self, other: Self) -> __m256i {
            unsafe { _mm256_cmpeq_epi32(self, other) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u64(self, other: Self) -> __m256i {
            unsafe { _mm256_cmpeq_epi64(self, other) }
        }

        #[inline(always)]
        unsafe fn or(self, other: Self) -> __m256i {
            unsafe { _mm256_or_si256(self, other) }
        }

        #[inline(always)]
        unsafe fn movemask_u8(self) -> u64 {
            unsafe { _mm256_movemask_epi8(self) as u32 as u64 }
        }

        #[inline(always)]
        unsafe fn movemask_u32(self) -> u64 {
            unsafe { _mm256_movemask_ps(_mm256_castsi256_ps(self)) as u32 as u64 }
        }

        #[inline(always)]
        unsafe fn movemask_u64(self) -> u64 {
            unsafe { _mm256_movemask_pd(_mm256_castsi256_pd(self)) as u32 as u64 }
        }
    }
}

/// Compares produce `__mmask` registers on AVX-512; they are widened back to
/// all-ones lanes so the kernels can keep combining results with `or`.
#[cfg(lanescan_avx512)]
mod avx512 {
    use core::arch::x86_64::*;

    use super::Vector;

    impl Vector for __m512i {
        const BYTES: usize = 64;

        #[inline(always)]
        unsafe fn splat_u8(byte: u8) -> __m512i {
            unsafe { _mm512_set1_epi8(byte as i8) }
        }

        #[inline(always)]
        unsafe fn splat_u32(word: u32) -> __m512i {
            unsafe { _mm512_set1_epi32(word as i32) }
        }

        #[inline(always)]
        unsafe fn splat_u64(word: u64) -> __m512i {
            unsafe { _mm512_set1_epi64(word as i64) }
        }

        #[inline(always)]
        unsafe fn load_unaligned(data: *const u8) -> __m512i {
            unsafe { _mm512_loadu_si512(data.cast()) }
        }

        #[inline(always)]
        unsafe fn store_unaligned(self, data: *mut u8) {
            unsafe { _mm512_storeu_si512(data.cast(), self) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u8(self, other: Self) -> __m512i {
            unsafe { _mm512_movm_epi8(_mm512_cmpeq_epi8_mask(self, other)) }
        }

        #[inline(always)]
        unsafe fn cmpeq_u32(self, other: Self) -> __m512i {
            unsafe {
                let k = _mm512_cmpeq_epi32_mask(self, other);
                _mm512_maskz_mov_epi32(k, _mm512_set1_epi32(-1))
            }
        }

        #[inline(always)]
        unsafe fn cmpeq_u64(self, other: Self) -> __m512i {
            unsafe {
                let k = _mm512_cmpeq_epi64_mask(self, other);
                _mm512_maskz_mov_epi64(k, _mm512_set1_epi64(-1))
            }
        }

        #[inline(always)]
        unsafe fn or(self, other: Self) -> __m512i {
            unsafe { _mm512_or_si512(self, other) }
        }

        #[inline(always)]
        unsafe fn movemask_u8(self) -> u64 {
            unsafe { _mm512_movepi8_mask(self) }
        }

        #[inline(always)]
        unsafe fn movemask_u32(self) -> u64 {
            unsafe { _mm512_cmplt_epi32_mask(self, _mm512_setzero_si512()) as u64 }
        }

        #[inline(always)]
        unsafe fn movemask_u64(self) -> u64 {
            unsafe { _mm512_cmplt_epi64_mask(self, _mm512_setzero_si512()) as u64 }
        }
    }
}
