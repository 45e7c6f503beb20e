//! Scalar Backend Implementation
//!
//! Non-SIMD fallback that runs on every target. It is also the reference the
//! other backends are tested against.

use super::backend::CombineBackend;
use super::helpers::{process_add_sub, process_binary};
use crate::backends::scalar::ScalarLanes;
use crate::traits::LaneVector;

/// Scalar Backend (no SIMD)
#[derive(Copy, Clone, Debug)]
pub struct ScalarBackend;

impl CombineBackend for ScalarBackend {
    #[inline]
    fn add(a: &[i64], b: &[i64], output: &mut [i64]) {
        process_binary::<ScalarLanes, _>(a, b, output, ScalarLanes::add, i64::wrapping_add);
    }

    #[inline]
    fn sub(a: &[i64], b: &[i64], output: &mut [i64]) {
        process_binary::<ScalarLanes, _>(a, b, output, ScalarLanes::sub, i64::wrapping_sub);
    }

    #[inline]
    fn add_sub(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]) {
        process_add_sub::<ScalarLanes>(sum, diff, a, b);
    }

    fn name() -> &'static str {
        "scalar"
    }
}
