//! Scalar lane implementation
//!
//! Single-lane fallback that works on any platform. It is the reference every
//! SIMD backend is checked against.

use crate::traits::LaneVector;

/// Scalar vector wrapper (single lane)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarLanes(pub i64);

impl LaneVector for ScalarLanes {
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: i64) -> Self {
        ScalarLanes(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[i64]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for scalar load");
        ScalarLanes(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [i64]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for scalar store"
        );
        slice[0] = self.0;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarLanes(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarLanes(self.0.wrapping_sub(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let result = ScalarLanes(2).add(ScalarLanes(3));
        assert_eq!(result.0, 5);
    }

    #[test]
    fn test_sub() {
        let result = ScalarLanes(1).sub(ScalarLanes(4));
        assert_eq!(result.0, -3);
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(ScalarLanes(i64::MAX).add(ScalarLanes(1)).0, i64::MIN);
        assert_eq!(ScalarLanes(i64::MIN).sub(ScalarLanes(1)).0, i64::MAX);
    }

    #[test]
    fn test_slice_roundtrip() {
        let mut out = [0i64; 3];
        ScalarLanes::from_slice(&[42, 7, 9]).to_slice(&mut out);
        assert_eq!(out, [42, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "Slice too short")]
    fn test_load_empty_slice_panics() {
        let _ = ScalarLanes::from_slice(&[]);
    }
}
