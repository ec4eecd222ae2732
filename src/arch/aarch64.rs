//! ARM64 (AArch64) optimized implementations.
//!
//! Bit operations compile to the native CNT, CLZ, and RBIT+CLZ instruction
//! sequences. Half-float conversion uses the scalar FCVT instructions of the
//! base A64 floating-point instruction set, which round to nearest-even and
//! therefore match the portable software conversion bit-for-bit.

use super::{BitOps, HalfOps};

use std::arch::asm;

/// ARM64-optimized primitive operations.
pub struct NeonOps;

impl BitOps for NeonOps {
    /// Population count via the NEON cnt instruction, which the standard
    /// library emits for `count_ones` on aarch64.
    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        value.count_ones()
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        value.count_ones()
    }

    /// Uses the clz instruction, which is defined at zero and returns the
    /// full width.
    #[inline(always)]
    fn leading_zeros_u32(value: u32) -> u32 {
        value.leading_zeros()
    }

    #[inline(always)]
    fn leading_zeros_u64(value: u64) -> u32 {
        value.leading_zeros()
    }

    /// Uses the rbit + clz combination; defined at zero like the leading
    /// count.
    #[inline(always)]
    fn trailing_zeros_u32(value: u32) -> u32 {
        value.trailing_zeros()
    }

    #[inline(always)]
    fn trailing_zeros_u64(value: u64) -> u32 {
        value.trailing_zeros()
    }

    /// Compiles to a ror of the complemented count; the count wraps modulo
    /// the width.
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

impl HalfOps for NeonOps {
    /// Scalar fcvt single-to-half conversion. Writing an H destination
    /// zeroes the rest of the vector register, so the S-sized read back
    /// yields the zero-extended half bit pattern.
    #[inline(always)]
    fn f32_to_bits16(value: f32) -> u16 {
        let bits: u32;
        unsafe {
            asm!(
                "fcvt {tmp:h}, {src:s}",
                "fmov {out:w}, {tmp:s}",
                src = in(vreg) value,
                tmp = out(vreg) _,
                out = out(reg) bits,
                options(pure, nomem, nostack),
            );
        }
        bits as u16
    }

    /// Scalar fcvt half-to-single conversion; exact for all finite inputs.
    #[inline(always)]
    fn bits16_to_f32(bits: u16) -> f32 {
        let value: f32;
        unsafe {
            asm!(
                "fmov {tmp:s}, {src:w}",
                "fcvt {out:s}, {tmp:h}",
                src = in(reg) u32::from(bits),
                tmp = out(vreg) _,
                out = out(vreg) value,
                options(pure, nomem, nostack),
            );
        }
        value
    }
}
