//! Fast approximate math routines built on IEEE-754 bit manipulation.
//!
//! Each function trades a bounded, documented relative error for significant
//! speed over the exact library routine. The 32-bit float implementations
//! carry the actual bit hacks; `f64` promotes to `f32`, computes, and
//! demotes back, inheriting the single-precision error. All functions are
//! pure and deterministic.
//!
//! The magic constant and polynomial coefficients are part of the observable
//! contract: changing any of them changes the error/performance tradeoff and
//! is a behavioral change, not a refactor.

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Magic constant seeding the inverse square root Newton-Raphson iteration.
const INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Quadratic correction for the mantissa part of the base-2 logarithm,
/// interpolating log2 exactly at m = 1, 1.5, and 2. Maximum absolute error
/// on [1, 2) is about 9e-3, near m = 1.2.
const LOG2_POLY_A: f32 = -0.339_85;
const LOG2_POLY_B: f32 = 2.019_55;
const LOG2_POLY_C: f32 = -1.679_7;

/// A floating type supported by the fast approximate math routines. This
/// trait is sealed; `f32` carries the bit-hack specializations and `f64`
/// routes through them.
pub trait FastFloat: private::Sealed + Copy {
    #[doc(hidden)]
    fn fast_inverse_sqrt_impl(self) -> Self;

    #[doc(hidden)]
    fn fast_log2_impl(self) -> Self;

    #[doc(hidden)]
    fn ln_2() -> Self;
}

impl FastFloat for f32 {
    /// The classic bit-hack seed followed by one Newton-Raphson refinement
    /// step. The seed alone is within about 3.4% of the true value; the
    /// refinement brings the relative error under 0.2%.
    #[inline(always)]
    fn fast_inverse_sqrt_impl(self) -> f32 {
        let seed = f32::from_bits(INV_SQRT_MAGIC - (self.to_bits() >> 1));
        seed * (1.5 - 0.5 * self * seed * seed)
    }

    /// The exponent field yields the integral part of the logarithm
    /// directly; the mantissa, renormalized into [1, 2), is corrected by a
    /// fixed quadratic polynomial.
    #[inline(always)]
    fn fast_log2_impl(self) -> f32 {
        let bits = self.to_bits();
        let exponent = ((bits >> 23) & 0xff) as i32 - 127;
        let mantissa = f32::from_bits((bits & 0x007f_ffff) | 0x3f80_0000);
        let correction = (LOG2_POLY_A * mantissa + LOG2_POLY_B) * mantissa + LOG2_POLY_C;
        exponent as f32 + correction
    }

    #[inline(always)]
    fn ln_2() -> f32 {
        core::f32::consts::LN_2
    }
}

impl FastFloat for f64 {
    #[inline(always)]
    fn fast_inverse_sqrt_impl(self) -> f64 {
        f64::from((self as f32).fast_inverse_sqrt_impl())
    }

    #[inline(always)]
    fn fast_log2_impl(self) -> f64 {
        f64::from((self as f32).fast_log2_impl())
    }

    #[inline(always)]
    fn ln_2() -> f64 {
        core::f64::consts::LN_2
    }
}

/// Approximate `1 / sqrt(x)` with a relative error under 0.2%.
///
/// Requires `x > 0`. A non-positive input produces unspecified but
/// deterministic garbage; the caller is responsible for domain validity.
#[must_use]
#[inline(always)]
pub fn fast_inverse_sqrt<T: FastFloat>(x: T) -> T {
    x.fast_inverse_sqrt_impl()
}

/// Approximate `sqrt(x)` as `x * fast_inverse_sqrt(x)`, with the same
/// precondition and error bound as [`fast_inverse_sqrt`].
#[must_use]
#[inline(always)]
pub fn fast_sqrt<T: FastFloat>(x: T) -> T
where
    T: core::ops::Mul<Output = T>,
{
    x * x.fast_inverse_sqrt_impl()
}

/// Approximate `log2(x)` with an absolute error under 1e-2.
///
/// Requires `x > 0`; non-positive inputs produce unspecified but
/// deterministic garbage.
#[must_use]
#[inline(always)]
pub fn fast_log2<T: FastFloat>(x: T) -> T {
    x.fast_log2_impl()
}

/// Approximate the natural logarithm as `fast_log2(x) * ln(2)`.
#[must_use]
#[inline(always)]
pub fn fast_log<T: FastFloat>(x: T) -> T
where
    T: core::ops::Mul<Output = T>,
{
    x.fast_log2_impl() * T::ln_2()
}

/// Approximate the base-`base` logarithm as the ratio of two base-2
/// logarithms. Requires both arguments to be positive and `base != 1`.
#[must_use]
#[inline(always)]
pub fn fast_log_base<T: FastFloat>(base: T, x: T) -> T
where
    T: core::ops::Div<Output = T>,
{
    x.fast_log2_impl() / base.fast_log2_impl()
}
