//! Fixed-point arithmetic on a scaled integer.
//!
//! [`Fixed<I, F>`] stores a single integer of type `I` interpreted as
//! `value / 2^F`, where `F` is the fractional bit count fixed at definition
//! time. The fractional bit count must satisfy `0 < F < I::BITS`; an
//! instantiation violating this fails to compile, never at runtime.
//!
//! Arithmetic wraps silently per two's-complement on overflow. In
//! particular, multiplication forms the intermediate product at the base
//! width without promotion, so products whose raw intermediate exceeds the
//! base width wrap. This is a documented contract of the type, not a defect;
//! checked or saturating variants are deliberately not provided because they
//! would change observable behavior.
//!
//! The generic type is instantiated into a fixed family of named precisions
//! ([`FixedLow`], [`FixedHigh`], [`FixedU16_16`], [`FixedWide`]) that the
//! consuming vector and matrix layer uses directly.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An integer kind usable as the backing storage of a [`Fixed`] value: one
/// of `i32`, `i64`, `u32`, or `u64`. This trait is sealed.
pub trait FixedInt:
    private::Sealed + Copy + Eq + Ord + Hash + Default + fmt::Debug + fmt::Display
{
    /// The bit width of the type.
    const BITS: u32;

    /// Whether the type is a signed two's-complement kind.
    const SIGNED: bool;

    /// The all-zero value.
    const ZERO: Self;

    /// The value one.
    const ONE: Self;

    /// The maximum representable raw value.
    const MAX_RAW: Self;

    /// Wrapping addition of the raw fields.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Wrapping subtraction of the raw fields.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Wrapping multiplication of the raw fields.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Raw division; inherits the divide-by-zero behavior of the base
    /// integer division.
    fn raw_div(self, rhs: Self) -> Self;

    /// Raw remainder; inherits the divide-by-zero behavior of the base
    /// integer remainder.
    fn raw_rem(self, rhs: Self) -> Self;

    /// Bitwise AND of the raw fields.
    fn raw_and(self, rhs: Self) -> Self;

    /// Bitwise OR of the raw fields.
    fn raw_or(self, rhs: Self) -> Self;

    /// Bitwise XOR of the raw fields.
    fn raw_xor(self, rhs: Self) -> Self;

    /// Bitwise complement of the raw field.
    fn raw_not(self) -> Self;

    /// Left shift of the raw field; the count wraps modulo the width.
    fn raw_shl(self, count: u32) -> Self;

    /// Right shift of the raw field (arithmetic for signed kinds, logical
    /// for unsigned); the count wraps modulo the width.
    fn raw_shr(self, count: u32) -> Self;

    /// Whether the most significant bit of the raw field is set.
    fn top_bit(self) -> bool;

    /// Conversion from `f32` with truncation toward zero, saturating at the
    /// integer bounds.
    fn from_f32(value: f32) -> Self;

    /// Conversion from `f64` with truncation toward zero, saturating at the
    /// integer bounds.
    fn from_f64(value: f64) -> Self;

    /// Rounded conversion to `f32`.
    fn to_f32(self) -> f32;

    /// Rounded conversion to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_fixed_int {
    ($($t:ty = $signed:literal),*) => {
        $(
            impl FixedInt for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = $signed;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX_RAW: Self = <$t>::MAX;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn raw_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline(always)]
                fn raw_rem(self, rhs: Self) -> Self {
                    self % rhs
                }

                #[inline(always)]
                fn raw_and(self, rhs: Self) -> Self {
                    self & rhs
                }

                #[inline(always)]
                fn raw_or(self, rhs: Self) -> Self {
                    self | rhs
                }

                #[inline(always)]
                fn raw_xor(self, rhs: Self) -> Self {
                    self ^ rhs
                }

                #[inline(always)]
                fn raw_not(self) -> Self {
                    !self
                }

                #[inline(always)]
                fn raw_shl(self, count: u32) -> Self {
                    self.wrapping_shl(count)
                }

                #[inline(always)]
                fn raw_shr(self, count: u32) -> Self {
                    self.wrapping_shr(count)
                }

                #[inline(always)]
                fn top_bit(self) -> bool {
                    self >> (<$t>::BITS - 1) != 0
                }

                #[inline(always)]
                fn from_f32(value: f32) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_fixed_int!(i32 = true, i64 = true, u32 = false, u64 = false);

/// A signed integer kind usable as [`Fixed`] storage. Adds two's-complement
/// negation, which has no meaningful counterpart for the unsigned kinds.
pub trait SignedFixedInt: FixedInt {
    /// Wrapping two's-complement negation of the raw field.
    fn wrapping_neg(self) -> Self;
}

impl SignedFixedInt for i32 {
    #[inline(always)]
    fn wrapping_neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl SignedFixedInt for i64 {
    #[inline(always)]
    fn wrapping_neg(self) -> Self {
        self.wrapping_neg()
    }
}

/// A fixed-point number storing `I` raw bits interpreted as `raw / 2^F`.
///
/// See the [module documentation][self] for the arithmetic and overflow
/// contract.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Fixed<I: FixedInt, const F: u32> {
    raw: I,
}

impl<I: FixedInt, const F: u32> Fixed<I, F> {
    /// Definition-time validation of the fractional bit count. Referencing
    /// this constant from every constructor makes an invalid instantiation
    /// fail to compile before any value of the type can exist.
    const VALID: () = assert!(
        F > 0 && F < I::BITS,
        "fractional bit count must be nonzero and less than the base integer width"
    );

    /// The scale factor `2^F` as a raw integer.
    const SCALE: u64 = 1 << F;

    /// Construct from a raw field that already represents `value * 2^F`.
    #[must_use]
    #[inline(always)]
    pub fn from_raw(raw: I) -> Self {
        let () = Self::VALID;
        Self { raw }
    }

    /// Construct from an integer value; the raw field becomes
    /// `value * 2^F`, wrapping if the shifted value exceeds the base width.
    #[must_use]
    #[inline(always)]
    pub fn from_int(value: I) -> Self {
        let () = Self::VALID;
        Self {
            raw: value.raw_shl(F),
        }
    }

    /// Construct from a 32-bit float, scaling by `2^F` and truncating
    /// toward zero.
    #[must_use]
    #[inline(always)]
    pub fn from_f32(value: f32) -> Self {
        let () = Self::VALID;
        Self {
            raw: I::from_f32(value * Self::SCALE as f32),
        }
    }

    /// Construct from a 64-bit float, scaling by `2^F` and truncating
    /// toward zero.
    #[must_use]
    #[inline(always)]
    pub fn from_f64(value: f64) -> Self {
        let () = Self::VALID;
        Self {
            raw: I::from_f64(value * Self::SCALE as f64),
        }
    }

    /// Return the raw scaled-integer field.
    #[must_use]
    #[inline(always)]
    pub fn raw(self) -> I {
        self.raw
    }

    /// Truncate to the integer part, rounding toward zero.
    #[must_use]
    #[inline(always)]
    pub fn to_int(self) -> I {
        if I::SIGNED && self.raw.top_bit() {
            // negative value: bias by the fractional mask so the arithmetic
            // shift truncates toward zero instead of flooring
            let frac_mask = I::ONE.raw_shl(F).wrapping_sub(I::ONE);
            self.raw.wrapping_add(frac_mask).raw_shr(F)
        } else {
            self.raw.raw_shr(F)
        }
    }

    /// Convert to a 32-bit float by dividing the raw field by `2^F`,
    /// producing a rounded approximation of the exact fixed-point value.
    #[must_use]
    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        self.raw.to_f32() / Self::SCALE as f32
    }

    /// Convert to a 64-bit float by dividing the raw field by `2^F`.
    #[must_use]
    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.raw.to_f64() / Self::SCALE as f64
    }
}

/// Reciprocal of a fixed-point value.
///
/// Returns the maximum representable value when the input carries zero raw
/// bits, avoiding a divide-by-zero fault at the cost of a silently wrong
/// "infinite" stand-in.
#[must_use]
#[inline(always)]
pub fn rcp<I: FixedInt, const F: u32>(value: Fixed<I, F>) -> Fixed<I, F> {
    if value.raw == I::ZERO {
        Fixed::from_raw(I::MAX_RAW)
    } else {
        Fixed::from_int(I::ONE) / value
    }
}

/// Whether the most significant bit of the raw field is set. For signed
/// base types this is the sign bit.
#[must_use]
#[inline(always)]
pub fn signbit<I: FixedInt, const F: u32>(value: Fixed<I, F>) -> bool {
    value.raw.top_bit()
}

impl<I: FixedInt, const F: u32> Add for Fixed<I, F> {
    type Output = Self;

    /// Direct raw addition; both operands share the same scale.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(rhs.raw))
    }
}

impl<I: FixedInt, const F: u32> Sub for Fixed<I, F> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(rhs.raw))
    }
}

impl<I: FixedInt, const F: u32> Mul for Fixed<I, F> {
    type Output = Self;

    /// Raw multiplication rescaled by an arithmetic shift of `F`. The
    /// intermediate product is formed at the base width, so it wraps when
    /// the true product needs more bits.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_mul(rhs.raw).raw_shr(F))
    }
}

impl<I: FixedInt, const F: u32> Div for Fixed<I, F> {
    type Output = Self;

    /// The dividend is shifted left by `F` before the raw division to
    /// preserve fractional precision. Dividing by a zero-valued operand
    /// behaves exactly as the base integer division does.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.raw_shl(F).raw_div(rhs.raw))
    }
}

impl<I: FixedInt, const F: u32> Rem for Fixed<I, F> {
    type Output = Self;

    /// Raw remainder; the result keeps the common scale.
    #[inline(always)]
    fn rem(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.raw_rem(rhs.raw))
    }
}

impl<I: FixedInt, const F: u32> BitAnd for Fixed<I, F> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.raw_and(rhs.raw))
    }
}

impl<I: FixedInt, const F: u32> BitOr for Fixed<I, F> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.raw_or(rhs.raw))
    }
}

impl<I: FixedInt, const F: u32> BitXor for Fixed<I, F> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.raw_xor(rhs.raw))
    }
}

impl<I: FixedInt, const F: u32> Not for Fixed<I, F> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self::from_raw(self.raw.raw_not())
    }
}

impl<I: FixedInt, const F: u32> Shl<u32> for Fixed<I, F> {
    type Output = Self;

    /// Shifts the entire raw field, fractional bits included.
    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        Self::from_raw(self.raw.raw_shl(count))
    }
}

impl<I: FixedInt, const F: u32> Shr<u32> for Fixed<I, F> {
    type Output = Self;

    /// Shifts the entire raw field, fractional bits included.
    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        Self::from_raw(self.raw.raw_shr(count))
    }
}

impl<I: SignedFixedInt, const F: u32> Neg for Fixed<I, F> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }
}

impl<I: FixedInt, const F: u32> AddAssign for Fixed<I, F> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<I: FixedInt, const F: u32> SubAssign for Fixed<I, F> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<I: FixedInt, const F: u32> MulAssign for Fixed<I, F> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<I: FixedInt, const F: u32> DivAssign for Fixed<I, F> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<I: FixedInt, const F: u32> RemAssign for Fixed<I, F> {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<I: FixedInt, const F: u32> BitAndAssign for Fixed<I, F> {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<I: FixedInt, const F: u32> BitOrAssign for Fixed<I, F> {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<I: FixedInt, const F: u32> BitXorAssign for Fixed<I, F> {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<I: FixedInt, const F: u32> ShlAssign<u32> for Fixed<I, F> {
    #[inline(always)]
    fn shl_assign(&mut self, count: u32) {
        *self = *self << count;
    }
}

impl<I: FixedInt, const F: u32> ShrAssign<u32> for Fixed<I, F> {
    #[inline(always)]
    fn shr_assign(&mut self, count: u32) {
        *self = *self >> count;
    }
}

impl<I: FixedInt, const F: u32> PartialOrd for Fixed<I, F> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: FixedInt, const F: u32> Ord for Fixed<I, F> {
    /// Raw-field ordering, valid because all values of an instantiation
    /// share one scale.
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<I: FixedInt, const F: u32> Hash for Fixed<I, F> {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<I: FixedInt, const F: u32> Default for Fixed<I, F> {
    /// The zero value. Routed through [`Fixed::from_raw`] so that an invalid
    /// fractional bit count is rejected at compile time on this path too.
    #[inline(always)]
    fn default() -> Self {
        Self::from_raw(I::ZERO)
    }
}

#[cfg(feature = "serde")]
impl<I: FixedInt + serde::Serialize, const F: u32> serde::Serialize for Fixed<I, F> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, I: FixedInt + serde::Deserialize<'de>, const F: u32> serde::Deserialize<'de>
    for Fixed<I, F>
{
    /// Deserializes the raw field, routed through [`Fixed::from_raw`] so the
    /// definition-time validation also covers values built from serialized
    /// data.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_raw(I::deserialize(deserializer)?))
    }
}

impl<I: FixedInt, const F: u32> fmt::Debug for Fixed<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed::<_, {}>({:?} = {})", F, self.raw, self.to_f64())
    }
}

impl<I: FixedInt, const F: u32> fmt::Display for Fixed<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

/// Low-precision signed format: 24 integer bits, 7 fractional bits.
pub type FixedLow = Fixed<i32, 7>;

/// High-precision signed format: 8 integer bits, 23 fractional bits.
pub type FixedHigh = Fixed<i32, 23>;

/// Unsigned 16.16 split, the traditional texture-coordinate format.
pub type FixedU16_16 = Fixed<u32, 16>;

/// Wide signed format: 32 integer bits, 31 fractional bits.
pub type FixedWide = Fixed<i64, 31>;

#[cfg(test)]
mod tests;
