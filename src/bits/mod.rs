//! Bit-manipulation primitives for 32- and 64-bit signed and unsigned
//! integers: population count, leading and trailing zero count, and circular
//! rotation.
//!
//! All functions are total. The zero-count functions return the full bit
//! width for a zero input, and rotation counts are reduced modulo the width,
//! so `rotate_left(rotate_right(n, k), k) == n` holds for any `k` including
//! counts past the width. Signed integers are treated as their
//! two's-complement bit strings; the sign bit counts like any other bit.
//!
//! The actual implementation is selected at compile time from the bodies in
//! [`crate::arch`].

use crate::arch::{Arch, BitOps};

mod private {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// An integer type the bit primitives operate on: one of `u32`, `u64`,
/// `i32`, or `i64`. This trait is sealed; the four implementations dispatch
/// into the architecture-selected backend.
pub trait BitInt: private::Sealed + Copy {
    /// The bit width of the type.
    const BITS: u32;

    #[doc(hidden)]
    fn popcount_impl(self) -> u32;

    #[doc(hidden)]
    fn leading_zeros_impl(self) -> u32;

    #[doc(hidden)]
    fn trailing_zeros_impl(self) -> u32;

    #[doc(hidden)]
    fn rotate_left_impl(self, count: u32) -> Self;

    #[doc(hidden)]
    fn rotate_right_impl(self, count: u32) -> Self;
}

impl BitInt for u32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn popcount_impl(self) -> u32 {
        Arch::popcount_u32(self)
    }

    #[inline(always)]
    fn leading_zeros_impl(self) -> u32 {
        Arch::leading_zeros_u32(self)
    }

    #[inline(always)]
    fn trailing_zeros_impl(self) -> u32 {
        Arch::trailing_zeros_u32(self)
    }

    #[inline(always)]
    fn rotate_left_impl(self, count: u32) -> Self {
        Arch::rotate_left_u32(self, count)
    }

    #[inline(always)]
    fn rotate_right_impl(self, count: u32) -> Self {
        Arch::rotate_right_u32(self, count)
    }
}

impl BitInt for u64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn popcount_impl(self) -> u32 {
        Arch::popcount_u64(self)
    }

    #[inline(always)]
    fn leading_zeros_impl(self) -> u32 {
        Arch::leading_zeros_u64(self)
    }

    #[inline(always)]
    fn trailing_zeros_impl(self) -> u32 {
        Arch::trailing_zeros_u64(self)
    }

    #[inline(always)]
    fn rotate_left_impl(self, count: u32) -> Self {
        Arch::rotate_left_u64(self, count)
    }

    #[inline(always)]
    fn rotate_right_impl(self, count: u32) -> Self {
        Arch::rotate_right_u64(self, count)
    }
}

impl BitInt for i32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn popcount_impl(self) -> u32 {
        Arch::popcount_u32(self as u32)
    }

    #[inline(always)]
    fn leading_zeros_impl(self) -> u32 {
        Arch::leading_zeros_u32(self as u32)
    }

    #[inline(always)]
    fn trailing_zeros_impl(self) -> u32 {
        Arch::trailing_zeros_u32(self as u32)
    }

    #[inline(always)]
    fn rotate_left_impl(self, count: u32) -> Self {
        Arch::rotate_left_u32(self as u32, count) as i32
    }

    #[inline(always)]
    fn rotate_right_impl(self, count: u32) -> Self {
        Arch::rotate_right_u32(self as u32, count) as i32
    }
}

impl BitInt for i64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn popcount_impl(self) -> u32 {
        Arch::popcount_u64(self as u64)
    }

    #[inline(always)]
    fn leading_zeros_impl(self) -> u32 {
        Arch::leading_zeros_u64(self as u64)
    }

    #[inline(always)]
    fn trailing_zeros_impl(self) -> u32 {
        Arch::trailing_zeros_u64(self as u64)
    }

    #[inline(always)]
    fn rotate_left_impl(self, count: u32) -> Self {
        Arch::rotate_left_u64(self as u64, count) as i64
    }

    #[inline(always)]
    fn rotate_right_impl(self, count: u32) -> Self {
        Arch::rotate_right_u64(self as u64, count) as i64
    }
}

/// Count the number of set bits in `value`. For signed inputs, the sign bit
/// counts like any other bit.
#[must_use]
#[inline(always)]
pub fn popcount<T: BitInt>(value: T) -> u32 {
    value.popcount_impl()
}

/// Count the zero bits above the most significant set bit of `value`.
/// Returns the full bit width for a zero input.
#[must_use]
#[inline(always)]
pub fn count_leading_zeros<T: BitInt>(value: T) -> u32 {
    value.leading_zeros_impl()
}

/// Count the zero bits below the least significant set bit of `value`.
/// Returns the full bit width for a zero input.
#[must_use]
#[inline(always)]
pub fn count_trailing_zeros<T: BitInt>(value: T) -> u32 {
    value.trailing_zeros_impl()
}

/// Rotate the bits of `value` left (towards the most significant end) by
/// `count` positions. The count is reduced modulo the bit width, so counts
/// past the width wrap around.
#[must_use]
#[inline(always)]
pub fn rotate_left<T: BitInt>(value: T, count: u32) -> T {
    value.rotate_left_impl(count)
}

/// Rotate the bits of `value` right (towards the least significant end) by
/// `count` positions. The count is reduced modulo the bit width, so counts
/// past the width wrap around.
#[must_use]
#[inline(always)]
pub fn rotate_right<T: BitInt>(value: T, count: u32) -> T {
    value.rotate_right_impl(count)
}

#[cfg(test)]
mod tests;
