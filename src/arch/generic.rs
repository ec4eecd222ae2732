//! Generic fallback implementations for unsupported architectures.
//!
//! These bodies use only shifts, masks, and integer arithmetic, so they
//! compile on every target. They are also the reference against which the
//! architecture-specific paths are tested.

use super::{BitOps, HalfOps};

/// Portable implementations of all primitive operations.
pub struct Portable;

impl BitOps for Portable {
    /// SWAR population count (Hamming weight over 2-, 4-, then 8-bit fields).
    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        let v = value - ((value >> 1) & 0x5555_5555);
        let v = (v & 0x3333_3333) + ((v >> 2) & 0x3333_3333);
        let v = (v + (v >> 4)) & 0x0f0f_0f0f;
        v.wrapping_mul(0x0101_0101) >> 24
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        let v = value - ((value >> 1) & 0x5555_5555_5555_5555);
        let v = (v & 0x3333_3333_3333_3333) + ((v >> 2) & 0x3333_3333_3333_3333);
        let v = (v + (v >> 4)) & 0x0f0f_0f0f_0f0f_0f0f;
        (v.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
    }

    /// Binary-search leading zero count. The zero input is special-cased
    /// explicitly, since native count instructions on some architectures
    /// leave it undefined and this body is the behavioral reference.
    #[inline(always)]
    fn leading_zeros_u32(value: u32) -> u32 {
        if value == 0 {
            return 32;
        }
        let mut v = value;
        let mut n = 0;
        if v & 0xffff_0000 == 0 {
            n += 16;
            v <<= 16;
        }
        if v & 0xff00_0000 == 0 {
            n += 8;
            v <<= 8;
        }
        if v & 0xf000_0000 == 0 {
            n += 4;
            v <<= 4;
        }
        if v & 0xc000_0000 == 0 {
            n += 2;
            v <<= 2;
        }
        if v & 0x8000_0000 == 0 {
            n += 1;
        }
        n
    }

    #[inline(always)]
    fn leading_zeros_u64(value: u64) -> u32 {
        if value == 0 {
            return 64;
        }
        let high = (value >> 32) as u32;
        if high != 0 {
            Self::leading_zeros_u32(high)
        } else {
            32 + Self::leading_zeros_u32(value as u32)
        }
    }

    /// Isolate the lowest set bit and count below it. Zero is special-cased
    /// for the same reason as in the leading count.
    #[inline(always)]
    fn trailing_zeros_u32(value: u32) -> u32 {
        if value == 0 {
            return 32;
        }
        Self::popcount_u32((value & value.wrapping_neg()) - 1)
    }

    #[inline(always)]
    fn trailing_zeros_u64(value: u64) -> u32 {
        if value == 0 {
            return 64;
        }
        Self::popcount_u64((value & value.wrapping_neg()) - 1)
    }

    /// The count is reduced modulo the width before rotating, so counts past
    /// the width wrap around and rotation by a multiple of the width is the
    /// identity. The zero-reduced case is guarded to avoid a shift by the
    /// full width.
    #[inline(always)]
    fn rotate_left_u32(value: u32, count: u32) -> u32 {
        let count = count & 31;
        if count == 0 {
            value
        } else {
            (value << count) | (value >> (32 - count))
        }
    }

    #[inline(always)]
    fn rotate_left_u64(value: u64, count: u32) -> u64 {
        let count = count & 63;
        if count == 0 {
            value
        } else {
            (value << count) | (value >> (64 - count))
        }
    }

    #[inline(always)]
    fn rotate_right_u32(value: u32, count: u32) -> u32 {
        let count = count & 31;
        if count == 0 {
            value
        } else {
            (value >> count) | (value << (32 - count))
        }
    }

    #[inline(always)]
    fn rotate_right_u64(value: u64, count: u32) -> u64 {
        let count = count & 63;
        if count == 0 {
            value
        } else {
            (value >> count) | (value << (64 - count))
        }
    }
}

/// Smallest binary32 magnitude that converts to the binary16 infinity.
const F16_OVERFLOW: u32 = (127 + 16) << 23;

/// Binary32 infinity bit pattern (without sign).
const F32_INFINITY: u32 = 255 << 23;

/// Smallest binary32 magnitude whose binary16 conversion is still normal.
const F16_SMALLEST_NORMAL: u32 = 113 << 23;

/// Magic constant (0.5f) used to align subnormal half mantissas through the
/// float adder, inheriting its round-to-nearest-even behavior.
const SUBNORMAL_MAGIC: u32 = ((127 - 15) + (23 - 10) + 1) << 23;

impl HalfOps for Portable {
    /// Software binary32 to binary16 conversion with round-to-nearest-even.
    ///
    /// Exponent rebias from 127 to 15, mantissa narrowed from 23 to 10 bits.
    /// Overflow clamps to infinity, NaN payloads are quieted, and values
    /// below the normal half range produce correctly rounded subnormals.
    #[inline(always)]
    fn f32_to_bits16(value: f32) -> u16 {
        let bits = value.to_bits();
        let sign = ((bits >> 16) & 0x8000) as u16;
        let abs = bits & 0x7fff_ffff;

        if abs >= F16_OVERFLOW {
            // inf, NaN, or a finite value that overflows half range
            return if abs > F32_INFINITY {
                sign | 0x7e00
            } else {
                sign | 0x7c00
            };
        }

        if abs < F16_SMALLEST_NORMAL {
            // Subnormal or zero result. Adding the magic constant shifts the
            // mantissa into the low bits with the adder rounding it, and the
            // integer subtraction removes the magic exponent again.
            let aligned = f32::from_bits(abs) + f32::from_bits(SUBNORMAL_MAGIC);
            return sign | (aligned.to_bits() - SUBNORMAL_MAGIC) as u16;
        }

        // Normal result. The rebias folds into one subtraction, and the
        // 0xfff + odd-bit addend implements round-to-nearest-even before the
        // final narrowing shift. A mantissa carry correctly increments the
        // exponent, including the roll-over to infinity.
        let mantissa_odd = (abs >> 13) & 1;
        let rounded = abs - (112 << 23) + 0xfff + mantissa_odd;
        sign | (rounded >> 13) as u16
    }

    /// Software binary16 to binary32 conversion. Exact for all finite
    /// inputs; subnormal halfs are renormalized into the binary32 range.
    #[inline(always)]
    fn bits16_to_f32(bits: u16) -> f32 {
        let sign = u32::from(bits & 0x8000) << 16;
        let exponent = u32::from(bits >> 10) & 0x1f;
        let mantissa = u32::from(bits & 0x03ff);

        if exponent == 0x1f {
            // inf or NaN, payload widened into the binary32 mantissa
            return f32::from_bits(sign | 0x7f80_0000 | (mantissa << 13));
        }

        if exponent != 0 {
            // normal: rebias 15 -> 127 and widen the mantissa
            return f32::from_bits(sign | ((exponent + 112) << 23) | (mantissa << 13));
        }

        if mantissa == 0 {
            return f32::from_bits(sign);
        }

        // Subnormal half: shift the highest set mantissa bit into the
        // implicit-one position and adjust the exponent accordingly.
        let shift = Self::leading_zeros_u32(mantissa) - 21;
        let normalized = (mantissa << shift) & 0x03ff;
        f32::from_bits(sign | ((113 - shift) << 23) | (normalized << 13))
    }
}
