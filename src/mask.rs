//! Per-lane boolean mask.
//!
//! `Mask` wraps the native SIMD mask for the current platform; it is
//! conceptually a packed batch of bools. Comparisons on
//! [`Field`](crate::field::Field) produce a `Mask`, and a `Mask`
//! drives branchless selects and masked adds. Using an explicit mask
//! type instead of float-encoded masks means the iteration loop never
//! depends on the all-1s-bits convention, only the AVX2 backend does
//! internally.

use crate::backend::{MaskOps, NativeMask, NativeSimd, SimdOps};
use crate::field::Field;
use core::ops::{BitAnd, BitOr, Not};

/// A SIMD batch of boolean values using native mask storage.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Mask(pub(crate) NativeMask);

impl Mask {
    /// Check if any lane is true.
    #[inline(always)]
    pub fn any(&self) -> bool {
        self.0.any()
    }

    /// Check if all lanes are true.
    #[inline(always)]
    pub fn all(&self) -> bool {
        self.0.all()
    }

    /// Check if no lanes are true.
    #[inline(always)]
    pub fn none(&self) -> bool {
        !self.0.any()
    }

    /// Branchless select: `if_true` where the lane is set, `if_false` elsewhere.
    #[inline(always)]
    pub fn select(self, if_true: Field, if_false: Field) -> Field {
        Field(NativeSimd::simd_select(self.0, if_true.0, if_false.0))
    }
}

impl BitAnd for Mask {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Mask {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Not for Mask {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::field::Field;

    #[test]
    fn none_is_inverse_of_any() {
        let lanes = Field::sequential(0.0);
        let empty = lanes.lt(Field::splat(0.0));
        assert!(empty.none());
        assert!(!empty.any());
        assert!((!empty).all());
    }

    #[test]
    fn select_picks_per_lane() {
        let lanes = Field::sequential(0.0);
        let mask = lanes.ge(Field::splat(4.0));
        let picked = mask.select(Field::splat(9.0), lanes);
        assert_eq!(
            picked.to_array(),
            [0.0, 1.0, 2.0, 3.0, 9.0, 9.0, 9.0, 9.0]
        );
    }
}
