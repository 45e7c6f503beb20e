//! NEON Backend Implementation
//!
//! Processes two `i64` values per iteration in 128-bit registers. NEON is part of
//! the aarch64 baseline, so no runtime check is needed.

use super::backend::CombineBackend;
use super::helpers::{process_add_sub, process_binary};
use crate::backends::neon::NeonLanes;
use crate::traits::LaneVector;

/// NEON Backend (128-bit SIMD)
#[derive(Copy, Clone, Debug)]
pub struct NeonBackend;

impl CombineBackend for NeonBackend {
    #[inline]
    fn add(a: &[i64], b: &[i64], output: &mut [i64]) {
        process_binary::<NeonLanes, _>(a, b, output, NeonLanes::add, i64::wrapping_add);
    }

    #[inline]
    fn sub(a: &[i64], b: &[i64], output: &mut [i64]) {
        process_binary::<NeonLanes, _>(a, b, output, NeonLanes::sub, i64::wrapping_sub);
    }

    #[inline]
    fn add_sub(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]) {
        process_add_sub::<NeonLanes>(sum, diff, a, b);
    }

    fn name() -> &'static str {
        "neon"
    }
}
