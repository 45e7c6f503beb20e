//! Core lane-vector abstraction
//!
//! Every backend (scalar, AVX2, AVX-512, NEON) exposes a packed vector of `i64`
//! lanes through this trait, so the slice kernels in `simd::helpers` can be written
//! once and monomorphized per instruction set.

/// Packed vector of signed 64-bit lanes
///
/// Arithmetic wraps on overflow (two's complement) on every backend, matching what
/// the vector integer add/sub instructions do in hardware.
///
/// # Example
///
/// ```rust
/// use addsub_kernel::{LaneVector, ScalarLanes};
///
/// let a = ScalarLanes::splat(7);
/// let b = ScalarLanes::splat(3);
/// let mut out = [0i64; 1];
/// a.sub(b).to_slice(&mut out);
/// assert_eq!(out, [4]);
/// ```
///
/// # Public lane types
///
/// Only `ScalarLanes` is public. The SIMD lane types execute their instructions
/// without checking the CPU, so they are reachable only through the backends in
/// `simd`, which check first:
///
/// ```compile_fail
/// use addsub_kernel::Avx2Lanes;
/// ```
///
/// ```compile_fail
/// use addsub_kernel::backends::avx2::Avx2Lanes;
/// ```
///
/// ```compile_fail
/// use addsub_kernel::Avx512Lanes;
/// ```
///
/// ```compile_fail
/// use addsub_kernel::simd::helpers::process_add_sub;
/// ```
pub trait LaneVector: Copy + Clone + Sized {
    /// Number of `i64` lanes (1 for scalar, 2 for NEON, 4 for AVX2, 8 for AVX-512)
    const LANES: usize;

    /// Broadcast a value to all lanes
    fn splat(value: i64) -> Self;

    /// Load from a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements
    fn from_slice(slice: &[i64]) -> Self;

    /// Store to a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements
    fn to_slice(self, slice: &mut [i64]);

    /// Lane-wise wrapping addition
    fn add(self, rhs: Self) -> Self;

    /// Lane-wise wrapping subtraction
    fn sub(self, rhs: Self) -> Self;
}
