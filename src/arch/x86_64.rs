//! x86_64 optimized implementations.
//!
//! Bit operations compile to the POPCNT/LZCNT/TZCNT/ROL-class instructions
//! when the build target guarantees them. Half-float conversion uses the
//! F16C instructions when the target enables them and otherwise falls back
//! to the portable software conversion, which rounds identically.

use super::{BitOps, HalfOps};

#[cfg(target_feature = "f16c")]
use std::arch::x86_64::{
    __m128i, _mm_cvtph_ps, _mm_cvtps_ph, _mm_cvtss_f32, _mm_extract_epi16, _mm_insert_epi16,
    _mm_set_ss, _mm_setzero_si128, _MM_FROUND_NO_EXC, _MM_FROUND_TO_NEAREST_INT,
};

/// x86_64-optimized primitive operations.
pub struct X86Ops;

impl BitOps for X86Ops {
    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        // Uses the native popcnt instruction when available
        value.count_ones()
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        value.count_ones()
    }

    /// Uses the lzcnt instruction when available. Unlike the bare bsr
    /// instruction, lzcnt (and this function) is defined at zero and
    /// returns the full width.
    #[inline(always)]
    fn leading_zeros_u32(value: u32) -> u32 {
        value.leading_zeros()
    }

    #[inline(always)]
    fn leading_zeros_u64(value: u64) -> u32 {
        value.leading_zeros()
    }

    /// Uses the tzcnt instruction when available, with the same defined
    /// behavior at zero as the leading count.
    #[inline(always)]
    fn trailing_zeros_u32(value: u32) -> u32 {
        value.trailing_zeros()
    }

    #[inline(always)]
    fn trailing_zeros_u64(value: u64) -> u32 {
        value.trailing_zeros()
    }

    /// Compiles to the rol instruction; the count wraps modulo the width.
    #[inline(always)]
    fn rotate_left_u32(value: u32, count: u32) -> u32 {
        value.rotate_left(count)
    }

    #[inline(always)]
    fn rotate_left_u64(value: u64, count: u32) -> u64 {
        value.rotate_left(count)
    }

    #[inline(always)]
    fn rotate_right_u32(value: u32, count: u32) -> u32 {
        value.rotate_right(count)
    }

    #[inline(always)]
    fn rotate_right_u64(value: u64, count: u32) -> u64 {
        value.rotate_right(count)
    }
}

impl HalfOps for X86Ops {
    #[inline(always)]
    fn f32_to_bits16(value: f32) -> u16 {
        #[cfg(target_feature = "f16c")]
        unsafe {
            let packed =
                _mm_cvtps_ph::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(_mm_set_ss(value));
            _mm_extract_epi16::<0>(packed) as u16
        }

        #[cfg(not(target_feature = "f16c"))]
        {
            // Fallback to the portable software conversion
            super::generic::Portable::f32_to_bits16(value)
        }
    }

    #[inline(always)]
    fn bits16_to_f32(bits: u16) -> f32 {
        #[cfg(target_feature = "f16c")]
        unsafe {
            let packed: __m128i = _mm_insert_epi16::<0>(_mm_setzero_si128(), i32::from(bits));
            _mm_cvtss_f32(_mm_cvtph_ps(packed))
        }

        #[cfg(not(target_feature = "f16c"))]
        {
            // Fallback to the portable software conversion
            super::generic::Portable::bits16_to_f32(bits)
        }
    }
}
