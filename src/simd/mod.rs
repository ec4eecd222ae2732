//! A four-lane single-precision SIMD vector wrapper.
//!
//! [`F32x4`] is the storage unit the consuming vector and matrix layer
//! builds on. It is backed by an SSE register on x86_64, a NEON register on
//! aarch64, and a plain array elsewhere; the backing is selected entirely at
//! compile time and all backends are behaviorally identical.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{
    __m128, _mm_add_ps, _mm_div_ps, _mm_loadu_ps, _mm_mul_ps, _mm_set1_ps, _mm_storeu_ps,
    _mm_sub_ps,
};

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::{
    float32x4_t, vaddq_f32, vdivq_f32, vdupq_n_f32, vld1q_f32, vmulq_f32, vst1q_f32, vsubq_f32,
};

/// A vector of four `f32` lanes processed by one SIMD instruction per
/// operation where the target supports it.
///
/// Lane order is positional: lane 0 is the first array element. Equality is
/// lane-wise float equality, so NaN lanes compare unequal like scalar
/// floats.
#[derive(Clone, Copy)]
pub struct F32x4 {
    #[cfg(target_arch = "x86_64")]
    lanes: __m128,
    #[cfg(target_arch = "aarch64")]
    lanes: float32x4_t,
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    lanes: [f32; 4],
}

impl F32x4 {
    /// Construct from four lane values.
    #[must_use]
    #[inline(always)]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Construct with all four lanes set to `value`.
    #[must_use]
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                lanes: unsafe { _mm_set1_ps(value) },
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                lanes: unsafe { vdupq_n_f32(value) },
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self {
                lanes: [value; 4],
            }
        }
    }

    /// Construct from an array in lane order.
    #[must_use]
    #[inline(always)]
    pub fn from_array(values: [f32; 4]) -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                lanes: unsafe { _mm_loadu_ps(values.as_ptr()) },
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                lanes: unsafe { vld1q_f32(values.as_ptr()) },
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self { lanes: values }
        }
    }

    /// Extract the lanes as an array in lane order.
    #[must_use]
    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        #[cfg(target_arch = "x86_64")]
        {
            let mut out = [0.0; 4];
            unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.lanes) };
            out
        }

        #[cfg(target_arch = "aarch64")]
        {
            let mut out = [0.0; 4];
            unsafe { vst1q_f32(out.as_mut_ptr(), self.lanes) };
            out
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            self.lanes
        }
    }

    /// Lane-wise addition.
    #[must_use]
    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                lanes: unsafe { _mm_add_ps(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                lanes: unsafe { vaddq_f32(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            let (a, b) = (self.lanes, rhs.lanes);
            Self {
                lanes: [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]],
            }
        }
    }

    /// Lane-wise subtraction.
    #[must_use]
    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                lanes: unsafe { _mm_sub_ps(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                lanes: unsafe { vsubq_f32(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            let (a, b) = (self.lanes, rhs.lanes);
            Self {
                lanes: [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]],
            }
        }
    }

    /// Lane-wise multiplication.
    #[must_use]
    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                lanes: unsafe { _mm_mul_ps(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                lanes: unsafe { vmulq_f32(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            let (a, b) = (self.lanes, rhs.lanes);
            Self {
                lanes: [a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]],
            }
        }
    }

    /// Lane-wise division.
    #[must_use]
    #[inline(always)]
    pub fn div(self, rhs: Self) -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                lanes: unsafe { _mm_div_ps(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                lanes: unsafe { vdivq_f32(self.lanes, rhs.lanes) },
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            let (a, b) = (self.lanes, rhs.lanes);
            Self {
                lanes: [a[0] / b[0], a[1] / b[1], a[2] / b[2], a[3] / b[3]],
            }
        }
    }

    /// Rearrange lanes by index: lane `i` of the result is lane `INDEX[i]`
    /// of the input. Indices past 3 panic in debug builds and are undefined
    /// lane garbage in release builds, mirroring the shuffle instructions.
    #[must_use]
    #[inline(always)]
    pub fn swizzle<const X: usize, const Y: usize, const Z: usize, const W: usize>(self) -> Self {
        debug_assert!(X < 4 && Y < 4 && Z < 4 && W < 4);
        let lanes = self.to_array();
        Self::from_array([lanes[X & 3], lanes[Y & 3], lanes[Z & 3], lanes[W & 3]])
    }
}

impl PartialEq for F32x4 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl core::fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("F32x4")
            .field(&self.to_array())
            .finish()
    }
}
