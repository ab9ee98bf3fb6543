//! `Field` — the user-facing packed f32 vector.
//!
//! A thin newtype over the platform's native SIMD vector. Arithmetic
//! goes through operators; comparisons return a [`Mask`] rather than a
//! float-encoded result, so callers never touch the bit-pattern
//! representation.

use crate::backend::{NativeSimd, SimdOps};
use crate::mask::Mask;
use crate::LANES;
use core::ops::{Add, Div, Mul, Sub};

/// A packed vector of [`LANES`] f32 values.
#[derive(Copy, Clone, Debug, Default)]
#[repr(transparent)]
pub struct Field(pub(crate) NativeSimd);

impl Field {
    /// Splat a scalar across all lanes.
    #[inline(always)]
    pub fn splat(val: f32) -> Self {
        Self(NativeSimd::splat(val))
    }

    /// Lane `i` gets `start + i`.
    #[inline(always)]
    pub fn sequential(start: f32) -> Self {
        Self(NativeSimd::sequential(start))
    }

    /// Load lanes from a slice (must hold at least [`LANES`] values).
    #[inline(always)]
    pub fn from_slice(slice: &[f32]) -> Self {
        Self(NativeSimd::from_slice(slice))
    }

    /// Store all lanes to a slice (must hold at least [`LANES`] values).
    #[inline(always)]
    pub fn store(&self, out: &mut [f32]) {
        self.0.store(out)
    }

    /// Copy the lanes out as an array.
    #[inline(always)]
    pub fn to_array(&self) -> [f32; LANES] {
        let mut out = [0.0f32; LANES];
        self.0.store(&mut out);
        out
    }

    /// Ordered-quiet `<` per lane.
    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask {
        Mask(self.0.cmp_lt(rhs.0))
    }

    /// Ordered-quiet `<=` per lane.
    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask {
        Mask(self.0.cmp_le(rhs.0))
    }

    /// Ordered-quiet `>` per lane.
    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask {
        Mask(self.0.cmp_gt(rhs.0))
    }

    /// Ordered-quiet `>=` per lane.
    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask {
        Mask(self.0.cmp_ge(rhs.0))
    }

    /// `self + (mask ? val : 0)` per lane. Inactive lanes are untouched.
    #[inline(always)]
    pub fn add_masked(self, val: Self, mask: Mask) -> Self {
        Self(self.0.add_masked(val.0, mask.0))
    }
}

impl From<f32> for Field {
    #[inline(always)]
    fn from(val: f32) -> Self {
        Self::splat(val)
    }
}

impl Add for Field {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Field {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Field {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Field {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}
