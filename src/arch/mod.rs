//! Architecture-specific implementations of the numeric primitives.
//!
//! This module contains platform-specific bodies for the bit-manipulation
//! routines and the half-float conversion. One implementation is selected
//! per build configuration; there is no runtime capability probing. All
//! implementations are behaviorally identical, so the selection is a pure
//! performance optimization.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

/// Generic fallback implementations for unsupported architectures
pub mod generic;

/// Trait for architecture-specific bit manipulation operations.
///
/// Signed integers are handled by the callers in [`crate::bits`], which
/// reinterpret them as their unsigned two's-complement bit strings before
/// dispatching here.
pub trait BitOps {
    /// Count the number of set bits (population count)
    fn popcount_u32(value: u32) -> u32;

    /// Count the number of set bits (population count)
    fn popcount_u64(value: u64) -> u32;

    /// Count leading zeros. Must return 32 for a zero input.
    fn leading_zeros_u32(value: u32) -> u32;

    /// Count leading zeros. Must return 64 for a zero input.
    fn leading_zeros_u64(value: u64) -> u32;

    /// Count trailing zeros. Must return 32 for a zero input.
    fn trailing_zeros_u32(value: u32) -> u32;

    /// Count trailing zeros. Must return 64 for a zero input.
    fn trailing_zeros_u64(value: u64) -> u32;

    /// Rotate bits left by `count` positions, reduced modulo 32.
    fn rotate_left_u32(value: u32, count: u32) -> u32;

    /// Rotate bits left by `count` positions, reduced modulo 64.
    fn rotate_left_u64(value: u64, count: u32) -> u64;

    /// Rotate bits right by `count` positions, reduced modulo 32.
    fn rotate_right_u32(value: u32, count: u32) -> u32;

    /// Rotate bits right by `count` positions, reduced modulo 64.
    fn rotate_right_u64(value: u64, count: u32) -> u64;
}

/// Trait for architecture-specific half-precision conversion.
///
/// Every implementation rounds to nearest-even, clamps overflow to infinity,
/// and produces subnormal halfs for values below the normal range, so all
/// paths yield bit-identical results for finite inputs.
pub trait HalfOps {
    /// Convert a 32-bit float to its binary16 bit pattern.
    fn f32_to_bits16(value: f32) -> u16;

    /// Convert a binary16 bit pattern to the 32-bit float it represents.
    /// Exact for all finite inputs.
    fn bits16_to_f32(bits: u16) -> f32;
}

/// Select the appropriate implementation based on the target architecture
#[cfg(target_arch = "x86_64")]
/// Architecture-specific primitive operations implementation.
pub type Arch = x86_64::X86Ops;

#[cfg(target_arch = "aarch64")]
/// Architecture-specific primitive operations implementation.
pub type Arch = aarch64::NeonOps;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
/// Architecture-specific primitive operations implementation.
pub type Arch = generic::Portable;
