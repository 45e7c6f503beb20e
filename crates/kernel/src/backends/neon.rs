//! NEON lane implementation (ARM64)
//!
//! Two `i64` lanes in one 128-bit register. NEON is mandatory on aarch64, so no
//! runtime detection is needed.

use crate::traits::LaneVector;
use core::arch::aarch64::*;

/// NEON vector wrapper (2 lanes of i64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonLanes(int64x2_t);

impl LaneVector for NeonLanes {
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(value: i64) -> Self {
        unsafe { NeonLanes(vdupq_n_s64(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[i64]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON load");
        unsafe { NeonLanes(vld1q_s64(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [i64]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON store");
        unsafe { vst1q_s64(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonLanes(vaddq_s64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonLanes(vsubq_s64(self.0, rhs.0)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub_lanes() {
        let a = NeonLanes::from_slice(&[1, -2]);
        let b = NeonLanes::from_slice(&[4, 9]);
        let mut sum = [0i64; 2];
        let mut diff = [0i64; 2];
        a.add(b).to_slice(&mut sum);
        a.sub(b).to_slice(&mut diff);
        assert_eq!(sum, [5, 7]);
        assert_eq!(diff, [-3, -11]);
    }

    #[test]
    fn test_splat() {
        let mut out = [0i64; 2];
        NeonLanes::splat(-9).to_slice(&mut out);
        assert_eq!(out, [-9, -9]);
    }
}
