//! AVX2 lane implementation (x86-64)
//!
//! Four `i64` lanes in one 256-bit register. This is the width `addsub_4` is named
//! after (Skylake, four `long`s per `vpaddq`/`vpsubq`).
//!
//! **Note**: these methods execute AVX2 instructions unconditionally. They must
//! only be reached from code that has already confirmed AVX2 support, which in
//! this crate means through `simd::avx2::Avx2Backend`. The type is crate-private
//! for that reason.

use crate::traits::LaneVector;
use core::arch::x86_64::*;

/// AVX2 vector wrapper (4 lanes of i64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Lanes(__m256i);

impl LaneVector for Avx2Lanes {
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: i64) -> Self {
        unsafe { Avx2Lanes(_mm256_set1_epi64x(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[i64]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 load");
        // Unaligned load; length checked above
        unsafe { Avx2Lanes(_mm256_loadu_si256(slice.as_ptr() as *const __m256i)) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [i64]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 store");
        unsafe { _mm256_storeu_si256(slice.as_mut_ptr() as *mut __m256i, self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Lanes(_mm256_add_epi64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Lanes(_mm256_sub_epi64(self.0, rhs.0)) }
    }
}
