//! AVX2 backend (8 lanes, 256-bit YMM registers).
//!
//! Masks are stored as float vectors where each lane is all-1s bits
//! (true) or all-0s (false); `blendvps` and `movemask` consume that
//! representation directly. All comparisons use the `_OQ` (ordered,
//! quiet) predicates, so NaN lanes compare false.

use super::{MaskOps, SimdOps};
use core::arch::x86_64::*;
use core::fmt::{Debug, Formatter};
use core::ops::{Add, BitAnd, BitOr, Div, Mul, Not, Sub};

/// 8-lane mask for AVX2.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask8(__m256);

impl Default for Mask8 {
    fn default() -> Self {
        unsafe { Self(_mm256_setzero_ps()) }
    }
}

impl Debug for Mask8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Mask8({:08b})", unsafe { _mm256_movemask_ps(self.0) })
    }
}

impl MaskOps for Mask8 {
    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) != 0 }
    }

    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0xFF }
    }
}

impl BitAnd for Mask8 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_and_ps(self.0, rhs.0)) }
    }
}

impl BitOr for Mask8 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_or_ps(self.0, rhs.0)) }
    }
}

impl Not for Mask8 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let all_ones = _mm256_castsi256_ps(_mm256_set1_epi32(-1));
            Self(_mm256_xor_ps(self.0, all_ones))
        }
    }
}

/// 8-lane f32 vector for AVX2.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x8(__m256);

impl Default for F32x8 {
    fn default() -> Self {
        unsafe { Self(_mm256_setzero_ps()) }
    }
}

impl Debug for F32x8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut arr = [0.0f32; 8];
        self.store(&mut arr);
        write!(f, "F32x8({:?})", arr)
    }
}

impl SimdOps for F32x8 {
    type Mask = Mask8;
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(val: f32) -> Self {
        unsafe { Self(_mm256_set1_ps(val)) }
    }

    #[inline(always)]
    fn sequential(start: f32) -> Self {
        unsafe {
            // _mm256_set_ps args are in reverse lane order
            Self(_mm256_set_ps(
                start + 7.0,
                start + 6.0,
                start + 5.0,
                start + 4.0,
                start + 3.0,
                start + 2.0,
                start + 1.0,
                start,
            ))
        }
    }

    #[inline(always)]
    fn store(&self, out: &mut [f32]) {
        assert!(out.len() >= Self::LANES);
        unsafe { _mm256_storeu_ps(out.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Self(_mm256_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_LE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_ge(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_GE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn simd_select(mask: Mask8, if_true: Self, if_false: Self) -> Self {
        unsafe { Self(_mm256_blendv_ps(if_false.0, if_true.0, mask.0)) }
    }

    #[inline(always)]
    fn add_masked(self, val: Self, mask: Mask8) -> Self {
        // Relies on the all-1s/all-0s mask convention: AND yields val or +0.0.
        unsafe {
            let masked_val = _mm256_and_ps(mask.0, val.0);
            Self(_mm256_add_ps(self.0, masked_val))
        }
    }
}

impl Add for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_add_ps(self.0, rhs.0)) }
    }
}

impl Sub for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_sub_ps(self.0, rhs.0)) }
    }
}

impl Mul for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_mul_ps(self.0, rhs.0)) }
    }
}

impl Div for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_div_ps(self.0, rhs.0)) }
    }
}
