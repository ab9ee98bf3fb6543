//! Portable fallback backend.
//!
//! Eight lanes implemented with plain arrays and per-lane loops. This
//! is the default on targets without AVX2 and the reference semantics
//! for the test suite. Keeping the fallback at the same width as the
//! hardware backend means group shapes and trailing-edge handling are
//! identical everywhere.

use super::{MaskOps, SimdOps};
use core::ops::{Add, BitAnd, BitOr, Div, Mul, Not, Sub};

/// 8-lane boolean mask stored as an array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Mask8([bool; 8]);

impl MaskOps for Mask8 {
    #[inline(always)]
    fn any(self) -> bool {
        self.0.iter().any(|&b| b)
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.0.iter().all(|&b| b)
    }
}

impl BitAnd for Mask8 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] & rhs.0[i]))
    }
}

impl BitOr for Mask8 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] | rhs.0[i]))
    }
}

impl Not for Mask8 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(core::array::from_fn(|i| !self.0[i]))
    }
}

/// 8-lane f32 vector stored as an array.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct F32x8([f32; 8]);

impl SimdOps for F32x8 {
    type Mask = Mask8;
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(val: f32) -> Self {
        Self([val; 8])
    }

    #[inline(always)]
    fn sequential(start: f32) -> Self {
        Self(core::array::from_fn(|i| start + i as f32))
    }

    #[inline(always)]
    fn store(&self, out: &mut [f32]) {
        assert!(out.len() >= Self::LANES);
        out[..8].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        let mut lanes = [0.0f32; 8];
        lanes.copy_from_slice(&slice[..8]);
        Self(lanes)
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Mask8 {
        // `<` on f32 is already ordered-quiet: false when either side is NaN.
        Mask8(core::array::from_fn(|i| self.0[i] < rhs.0[i]))
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask8 {
        Mask8(core::array::from_fn(|i| self.0[i] <= rhs.0[i]))
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask8 {
        Mask8(core::array::from_fn(|i| self.0[i] > rhs.0[i]))
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Mask8 {
        Mask8(core::array::from_fn(|i| self.0[i] >= rhs.0[i]))
    }

    #[inline(always)]
    fn simd_select(mask: Mask8, if_true: Self, if_false: Self) -> Self {
        Self(core::array::from_fn(|i| {
            if mask.0[i] {
                if_true.0[i]
            } else {
                if_false.0[i]
            }
        }))
    }

    #[inline(always)]
    fn add_masked(self, val: Self, mask: Mask8) -> Self {
        Self(core::array::from_fn(|i| {
            if mask.0[i] {
                self.0[i] + val.0[i]
            } else {
                self.0[i]
            }
        }))
    }
}

impl Add for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Mul for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] * rhs.0[i]))
    }
}

impl Div for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] / rhs.0[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_counts_up() {
        let v = F32x8::sequential(3.0);
        let mut out = [0.0f32; 8];
        v.store(&mut out);
        assert_eq!(out, [3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn cmp_lt_is_ordered_quiet() {
        let nan = F32x8::splat(f32::NAN);
        let one = F32x8::splat(1.0);
        assert!(!nan.cmp_lt(one).any());
        assert!(!one.cmp_lt(nan).any());
        assert!(F32x8::splat(0.5).cmp_lt(one).all());
    }

    #[test]
    fn add_masked_freezes_inactive_lanes() {
        let base = F32x8::sequential(0.0);
        let one = F32x8::splat(1.0);
        // Active only where lane index < 4.
        let mask = F32x8::sequential(0.0).cmp_lt(F32x8::splat(4.0));
        let bumped = base.add_masked(one, mask);
        let mut out = [0.0f32; 8];
        bumped.store(&mut out);
        assert_eq!(out, [1.0, 2.0, 3.0, 4.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn select_blends_per_lane() {
        let t = F32x8::splat(1.0);
        let f = F32x8::splat(-1.0);
        let mask = F32x8::sequential(0.0).cmp_ge(F32x8::splat(6.0));
        let mut out = [0.0f32; 8];
        F32x8::simd_select(mask, t, f).store(&mut out);
        assert_eq!(out, [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn mask_boolean_algebra() {
        let lanes = F32x8::sequential(0.0);
        let low = lanes.cmp_lt(F32x8::splat(4.0));
        let high = lanes.cmp_ge(F32x8::splat(4.0));
        assert!(!(low & high).any());
        assert!((low | high).all());
        assert_eq!(!low, high);
    }
}
