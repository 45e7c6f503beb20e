//! Combine Backend Trait
//!
//! This module defines the contract that all backend implementations must satisfy.
//! All backends (Scalar, AVX2, AVX-512, NEON) implement `CombineBackend` with
//! bit-identical results - only throughput differs.

/// Combine Backend Trait
///
/// # Contract Requirements
///
/// 1. **Bit-identical output**: integer add/sub is exact, so every backend MUST match
///    the scalar backend exactly (including wrap-around on overflow)
/// 2. **no_std compatible**: no heap allocations
/// 3. **Zero-sized**: all backends are ZSTs and Copy
/// 4. **Equal lengths**: every slice passed to one call has the same length; callers
///    that work with a `count` narrow the slices to `count` first
///
/// # Example Usage
///
/// ```rust
/// use addsub_kernel::{CombineBackend, ScalarBackend};
///
/// let a = [1i64, 2, 3, 4];
/// let b = [4i64, 9, 16, 25];
/// let mut sum = [0i64; 4];
/// let mut diff = [0i64; 4];
///
/// ScalarBackend::add_sub(&mut sum, &mut diff, &a, &b);
/// assert_eq!(sum, [5, 11, 19, 29]);
/// assert_eq!(diff, [-3, -7, -13, -21]);
/// ```
pub trait CombineBackend: Copy {
    /// Element-wise addition: output[i] = a[i] + b[i]
    fn add(a: &[i64], b: &[i64], output: &mut [i64]);

    /// Element-wise subtraction: output[i] = a[i] - b[i]
    fn sub(a: &[i64], b: &[i64], output: &mut [i64]);

    /// Fused element-wise add and subtract
    ///
    /// Writes `sum[i] = a[i] + b[i]` and `diff[i] = a[i] - b[i]` in one pass, loading
    /// each input vector once.
    ///
    /// # Panics
    /// Panics if the four slices differ in length.
    fn add_sub(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]);

    /// Backend identifier for debugging and logging
    ///
    /// # Returns
    /// Static string identifying the backend: "scalar", "avx2", "avx512", or "neon"
    fn name() -> &'static str;
}
