//! AVX2 Backend Implementation
//!
//! Processes four `i64` values per iteration in 256-bit registers, with a scalar
//! loop for the remainder.
//!
//! # Requirements
//! - x86_64 architecture
//! - AVX2 CPU support (Intel Haswell 2013+, AMD Excavator 2015+)
//! - Compiled with `avx2` feature flag
//!
//! # Safety
//! The loops live in `#[target_feature(enable = "avx2")]` functions. The safe
//! trait methods assert AVX2 support before entering them, so calling
//! `Avx2Backend` directly on a CPU without AVX2 panics instead of faulting.

use super::backend::CombineBackend;
use super::dispatcher::CpuFeatures;
use super::helpers::{process_add_sub, process_binary};
use crate::backends::avx2::Avx2Lanes;
use crate::traits::LaneVector;

/// AVX2 Backend (256-bit SIMD)
#[derive(Copy, Clone, Debug)]
pub struct Avx2Backend;

#[inline]
fn assert_supported() {
    assert!(
        CpuFeatures::detect().has_avx2,
        "AVX2 backend called on a CPU without AVX2 support"
    );
}

impl CombineBackend for Avx2Backend {
    #[inline]
    fn add(a: &[i64], b: &[i64], output: &mut [i64]) {
        assert_supported();
        // SAFETY: AVX2 support checked above
        unsafe { add_avx2(a, b, output) }
    }

    #[inline]
    fn sub(a: &[i64], b: &[i64], output: &mut [i64]) {
        assert_supported();
        // SAFETY: AVX2 support checked above
        unsafe { sub_avx2(a, b, output) }
    }

    #[inline]
    fn add_sub(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]) {
        assert_supported();
        // SAFETY: AVX2 support checked above
        unsafe { add_sub_avx2(sum, diff, a, b) }
    }

    fn name() -> &'static str {
        "avx2"
    }
}

#[target_feature(enable = "avx2")]
unsafe fn add_avx2(a: &[i64], b: &[i64], output: &mut [i64]) {
    process_binary::<Avx2Lanes, _>(a, b, output, Avx2Lanes::add, i64::wrapping_add);
}

#[target_feature(enable = "avx2")]
unsafe fn sub_avx2(a: &[i64], b: &[i64], output: &mut [i64]) {
    process_binary::<Avx2Lanes, _>(a, b, output, Avx2Lanes::sub, i64::wrapping_sub);
}

#[target_feature(enable = "avx2")]
unsafe fn add_sub_avx2(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]) {
    process_add_sub::<Avx2Lanes>(sum, diff, a, b);
}
