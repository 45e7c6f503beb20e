//! AVX-512 lane implementation (x86-64, experimental)
//!
//! Eight `i64` lanes in one 512-bit register. Only AVX-512F is required for
//! 64-bit integer add/sub.
//!
//! **Note**: like the AVX2 lanes, these methods assume the CPU check has already
//! happened in `simd::avx512::Avx512Backend`.

use crate::traits::LaneVector;
use core::arch::x86_64::*;

/// AVX-512 vector wrapper (8 lanes of i64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx512Lanes(__m512i);

impl LaneVector for Avx512Lanes {
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: i64) -> Self {
        unsafe { Avx512Lanes(_mm512_set1_epi64(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[i64]) -> Self {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for AVX-512 load"
        );
        unsafe { Avx512Lanes(_mm512_loadu_epi64(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [i64]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for AVX-512 store"
        );
        unsafe { _mm512_storeu_epi64(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx512Lanes(_mm512_add_epi64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx512Lanes(_mm512_sub_epi64(self.0, rhs.0)) }
    }
}
