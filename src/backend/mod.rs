//! SIMD backend traits and platform selection.
//!
//! The iteration loop is written once, against [`SimdOps`] and
//! [`MaskOps`]; a backend supplies the packed f32 vector and its
//! per-lane mask for one platform. Two backends ship:
//!
//! - `x86::F32x8` — AVX2 intrinsics, compiled when the target enables
//!   the `avx2` feature.
//! - `portable::F32x8` — plain arrays, compiled everywhere else and
//!   used as the reference semantics in tests.
//!
//! Both are 8 lanes wide, so group shapes are identical across
//! platforms. Comparisons use ordered-quiet semantics: a lane
//! comparing against NaN yields false.

use core::fmt::Debug;
use core::ops::{Add, BitAnd, BitOr, Div, Mul, Not, Sub};

pub mod portable;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub mod x86;

/// Operations on a native per-lane boolean mask.
pub trait MaskOps:
    Copy + Clone + Debug + BitAnd<Output = Self> + BitOr<Output = Self> + Not<Output = Self>
{
    /// Check if any lane is true.
    fn any(self) -> bool;

    /// Check if all lanes are true.
    fn all(self) -> bool;
}

/// Packed f32 operations for one SIMD width.
pub trait SimdOps:
    Copy
    + Clone
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Native mask type for this SIMD width.
    type Mask: MaskOps;

    /// Number of lanes.
    const LANES: usize;

    /// Splat a scalar across all lanes.
    fn splat(val: f32) -> Self;

    /// Create sequential values `[start, start + 1, ...]`.
    fn sequential(start: f32) -> Self;

    /// Store all lanes to a slice (must hold at least `LANES` values).
    fn store(&self, out: &mut [f32]);

    /// Load lanes from a slice (must hold at least `LANES` values).
    fn from_slice(slice: &[f32]) -> Self;

    /// Ordered-quiet less-than comparison.
    fn cmp_lt(self, rhs: Self) -> Self::Mask;
    /// Ordered-quiet less-than-or-equal comparison.
    fn cmp_le(self, rhs: Self) -> Self::Mask;
    /// Ordered-quiet greater-than comparison.
    fn cmp_gt(self, rhs: Self) -> Self::Mask;
    /// Ordered-quiet greater-than-or-equal comparison.
    fn cmp_ge(self, rhs: Self) -> Self::Mask;

    /// Conditional select using the native mask.
    fn simd_select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Masked add: `self + (mask ? val : 0)` per lane.
    fn add_masked(self, val: Self, mask: Self::Mask) -> Self;
}

/// The packed f32 vector selected for the current platform.
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub type NativeSimd = x86::F32x8;

/// The packed f32 vector selected for the current platform.
#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub type NativeSimd = portable::F32x8;

/// The per-lane mask paired with [`NativeSimd`].
pub type NativeMask = <NativeSimd as SimdOps>::Mask;
