//! AVX-512 Backend Implementation (experimental)
//!
//! Processes eight `i64` values per iteration in 512-bit registers. Needs only
//! AVX-512F.
//!
//! # Safety
//! Same scheme as the AVX2 backend: the safe entry points assert CPU support and
//! then call into `#[target_feature(enable = "avx512f")]` loops.

use super::backend::CombineBackend;
use super::dispatcher::CpuFeatures;
use super::helpers::{process_add_sub, process_binary};
use crate::backends::avx512::Avx512Lanes;
use crate::traits::LaneVector;

/// AVX-512 Backend (512-bit SIMD)
#[derive(Copy, Clone, Debug)]
pub struct Avx512Backend;

#[inline]
fn assert_supported() {
    assert!(
        CpuFeatures::detect().has_avx512_f,
        "AVX-512 backend called on a CPU without AVX-512F support"
    );
}

impl CombineBackend for Avx512Backend {
    #[inline]
    fn add(a: &[i64], b: &[i64], output: &mut [i64]) {
        assert_supported();
        // SAFETY: AVX-512F support checked above
        unsafe { add_avx512(a, b, output) }
    }

    #[inline]
    fn sub(a: &[i64], b: &[i64], output: &mut [i64]) {
        assert_supported();
        // SAFETY: AVX-512F support checked above
        unsafe { sub_avx512(a, b, output) }
    }

    #[inline]
    fn add_sub(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]) {
        assert_supported();
        // SAFETY: AVX-512F support checked above
        unsafe { add_sub_avx512(sum, diff, a, b) }
    }

    fn name() -> &'static str {
        "avx512"
    }
}

#[target_feature(enable = "avx512f")]
unsafe fn add_avx512(a: &[i64], b: &[i64], output: &mut [i64]) {
    process_binary::<Avx512Lanes, _>(a, b, output, Avx512Lanes::add, i64::wrapping_add);
}

#[target_feature(enable = "avx512f")]
unsafe fn sub_avx512(a: &[i64], b: &[i64], output: &mut [i64]) {
    process_binary::<Avx512Lanes, _>(a, b, output, Avx512Lanes::sub, i64::wrapping_sub);
}

#[target_feature(enable = "avx512f")]
unsafe fn add_sub_avx512(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]) {
    process_add_sub::<Avx512Lanes>(sum, diff, a, b);
}
