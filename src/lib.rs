#![warn(missing_docs)]

//! This crate provides the low-level numeric primitives consumed by vector,
//! matrix, and quaternion toolkits: bit-manipulation routines, fast
//! approximate math derived from IEEE-754 bit tricks, a compact
//! half-precision storage type, and a configurable fixed-point numeric type.
//! All operations are pure, allocation-free, and safe to call from any number
//! of threads without coordination.
//!
//! # Primitives
//!  - [Bit primitives][bits]: population count, leading/trailing zero count,
//!    and circular rotation for 32- and 64-bit signed and unsigned integers.
//!  - [Fast approximate math][fast_math]: inverse square root, square root,
//!    and base-2/natural/arbitrary-base logarithms with documented error
//!    bounds.
//!  - [Half-precision emulation][half::Half]: a 16-bit binary16 storage type
//!    with full arithmetic via promotion to `f32`.
//!  - [Fixed-point arithmetic][fixed::Fixed]: an integer-backed fractional
//!    type parameterized by base integer kind and fractional bit count.
//!  - [SIMD float vector][simd::F32x4]: a four-lane `f32` wrapper backed by
//!    SSE, NEON, or a portable array, selected at compile time.
//!
//! # Intrinsics
//! Bit manipulation and half-float conversion dispatch at compile time to
//! architecture-specific implementations: x86_64 (POPCNT/LZCNT/TZCNT-class
//! instructions, F16C half conversion), aarch64 (CLZ/RBIT, scalar FCVT half
//! conversion), or a fully portable fallback. All paths are behaviorally
//! identical; the dispatch is a pure performance optimization. If the build
//! is configured for an instruction-set extension the executing processor
//! lacks, the program faults; availability is a build-time contract, never
//! probed at runtime.
//!
//! # Safety
//! This crate uses no unsafe code except compiler intrinsics for SIMD lane
//! arithmetic and the x86_64 half-float conversion, plus two short
//! inline-assembly sequences for the aarch64 half-float conversion. These
//! cannot fail with the provided inputs (provided they are supported by the
//! target machine), so even an incorrect implementation could only produce
//! incorrect results, not memory unsafety.

pub use fixed::{rcp, signbit, Fixed, FixedHigh, FixedLow, FixedU16_16, FixedWide};
pub use half::Half;
pub use simd::F32x4;

pub mod arch;
pub mod bits;
pub mod fast_math;
pub mod fixed;
pub mod half;
pub mod simd;

/// The crate-wide scalar type the consuming container layer compiles
/// against. Defaults to `f32`; the `double-precision` feature selects `f64`.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// The crate-wide scalar type the consuming container layer compiles
/// against. Defaults to `f32`; the `double-precision` feature selects `f64`.
#[cfg(feature = "double-precision")]
pub type Real = f64;
