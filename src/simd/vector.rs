//! The primitive operations every vector backend supplies.

/// Low level vector operations used by the search kernels.
///
/// Implemented once per register type (`__m128i`, `__m256i`, `__m512i`,
/// `uint8x16_t`). The kernels in [`crate::search::kernels`] are written
/// against this trait only, so one algorithm serves every width.
///
/// Movemask results put one bit per lane of the named width in the low bits
/// of a `u64`: bit `i` is set when lane `i` is all ones. Inputs to the movemask
/// methods are always the output of the matching `cmpeq_*` (or an `or` of
/// such outputs), so every lane is either all ones or all zeros.
///
/// # Safety
///
/// All methods are unsafe since they are implemented with vendor intrinsics.
/// Callers must ensure the required target features are enabled in the
/// calling function and supported by the current CPU. Implementations are
/// `#[inline(always)]` and carry no `#[target_feature]` of their own so they
/// inline into the per-backend entry points.
pub(crate) trait Vector: Copy + core::fmt::Debug {
    /// Register width in bytes
    const BYTES: usize;

    /// Broadcast `byte` into every 8-bit lane
    unsafe fn splat_u8(byte: u8) -> Self;

    /// Broadcast `word` into every 32-bit lane
    unsafe fn splat_u32(word: u32) -> Self;

    /// Broadcast `word` into every 64-bit lane
    unsafe fn splat_u64(word: u64) -> Self;

    /// Read `BYTES` bytes from `data`, which need not be aligned.
    ///
    /// # Safety
    ///
    /// At least `BYTES` bytes must be readable from `data`.
    unsafe fn load_unaligned(data: *const u8) -> Self;

    /// Write `BYTES` bytes to `data`, which need not be aligned.
    ///
    /// # Safety
    ///
    /// At least `BYTES` bytes must be writable at `data`.
    unsafe fn store_unaligned(self, data: *mut u8);

    /// Lane-wise equality on 8-bit lanes
    unsafe fn cmpeq_u8(self, other: Self) -> Self;

    /// Lane-wise equality on 32-bit lanes
    unsafe fn cmpeq_u32(self, other: Self) -> Self;

    /// Lane-wise equality on 64-bit lanes
    unsafe fn cmpeq_u64(self, other: Self) -> Self;

    /// Bitwise or
    unsafe fn or(self, other: Self) -> Self;

    /// One bit per 8-bit lane
    unsafe fn movemask_u8(self) -> u64;

    /// One bit per 32-bit lane
    unsafe fn movemask_u32(self) -> u64;

    /// One bit per 64-bit lane
    unsafe fn movemask_u64(self) -> u64;
}
