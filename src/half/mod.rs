//! Half-precision (binary16) floating-point emulation.
//!
//! [`Half`] is a 16-bit storage type with the IEEE-754 binary16 layout:
//! 1 sign bit, 5 exponent bits, 10 mantissa bits. Arithmetic is never done
//! natively at the 16-bit level; every operator promotes to `f32`, computes,
//! and demotes the result, so only the storage representation is halved.
//!
//! Conversion between `f32` and the 16-bit pattern dispatches through
//! [`crate::arch`] to a hardware conversion instruction, a NEON-based
//! conversion, or the portable software fallback, all of which round to
//! nearest-even identically.

use crate::arch::{Arch, HalfOps};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 16-bit binary16 floating-point storage type.
///
/// # Equality
/// `PartialEq`, `Eq`, and `Hash` operate on the raw 16-bit pattern rather
/// than the promoted float value. This is an intentional performance choice
/// with a visible wrinkle: `+0.0` and `-0.0` compare unequal, and two NaN
/// values compare equal exactly when their bit patterns match, unlike the
/// promoted comparison. Use [`Half::is_nan`] for NaN checks. The ordering
/// comparisons ([`PartialOrd`]) do promote and follow float semantics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Half(u16);

impl Half {
    /// Positive zero.
    pub const ZERO: Self = Self(0x0000);

    /// One.
    pub const ONE: Self = Self(0x3c00);

    /// Negative one.
    pub const NEG_ONE: Self = Self(0xbc00);

    /// Positive infinity.
    pub const INFINITY: Self = Self(0x7c00);

    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(0xfc00);

    /// A quiet NaN.
    pub const NAN: Self = Self(0x7e00);

    /// The largest finite value, 65504.
    pub const MAX: Self = Self(0x7bff);

    /// The smallest positive normal value, 2^-14.
    pub const MIN_POSITIVE: Self = Self(0x0400);

    /// Construct from a raw binary16 bit pattern.
    #[must_use]
    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Return the raw binary16 bit pattern.
    #[must_use]
    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Convert a 32-bit float to half precision, rounding to nearest-even.
    /// Values beyond the half range clamp to the infinities; values below
    /// the subnormal range round to zero.
    #[must_use]
    #[inline(always)]
    pub fn from_f32(value: f32) -> Self {
        Self(Arch::f32_to_bits16(value))
    }

    /// Convert to a 32-bit float. Exact for all finite values.
    #[must_use]
    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        Arch::bits16_to_f32(self.0)
    }

    /// Returns true if this value is a NaN of any payload.
    #[must_use]
    #[inline(always)]
    pub const fn is_nan(self) -> bool {
        self.0 & 0x7fff > 0x7c00
    }

    /// Returns true if this value is positive or negative infinity.
    #[must_use]
    #[inline(always)]
    pub const fn is_infinite(self) -> bool {
        self.0 & 0x7fff == 0x7c00
    }

    /// Returns true if the sign bit is set, including for `-0.0` and NaN.
    #[must_use]
    #[inline(always)]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & 0x8000 != 0
    }
}

impl From<f32> for Half {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<Half> for f32 {
    #[inline(always)]
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl Add for Half {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() + rhs.to_f32())
    }
}

impl Sub for Half {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() - rhs.to_f32())
    }
}

impl Mul for Half {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() * rhs.to_f32())
    }
}

impl Div for Half {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() / rhs.to_f32())
    }
}

impl AddAssign for Half {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Half {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Half {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Half {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for Half {
    type Output = Self;

    /// Toggles the sign bit; no promotion needed.
    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0 ^ 0x8000)
    }
}

impl PartialOrd for Half {
    /// Ordering promotes to `f32`, so it follows float semantics, including
    /// returning `None` when either side is NaN.
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({})", self.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}
