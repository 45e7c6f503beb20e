//! Generic helpers bridging slice-based backend operations to lane-vector kernels
//!
//! These hold the chunking logic shared by every backend: walk the slices in
//! `V::LANES`-sized chunks, run the vector kernel, then finish the remainder with a
//! scalar fallback.
//!
//! They are `#[inline(always)]` so that, when called from a
//! `#[target_feature(enable = ...)]` function, the whole loop is compiled with that
//! feature enabled.

use crate::traits::LaneVector;

/// Process a binary operation on slices using a lane-vector kernel
///
/// # Type Parameters
///
/// - `V`: The lane vector type (ScalarLanes, Avx2Lanes, etc.)
/// - `F`: The kernel function type (e.g., `fn(V, V) -> V`)
///
/// # Arguments
///
/// - `a`: First input slice
/// - `b`: Second input slice
/// - `output`: Output slice for results (must be same length as inputs)
/// - `kernel`: Vector kernel applied to each full chunk
/// - `scalar_fallback`: Fallback for the remainder
#[inline(always)]
pub fn process_binary<V, F>(
    a: &[i64],
    b: &[i64],
    output: &mut [i64],
    kernel: F,
    scalar_fallback: fn(i64, i64) -> i64,
) where
    V: LaneVector,
    F: Fn(V, V) -> V,
{
    assert_eq!(a.len(), b.len(), "Input slices must have the same length");
    assert_eq!(
        a.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    let lanes = V::LANES;
    let len = a.len();
    let chunks = len / lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let end = start + lanes;

        let vec_a = V::from_slice(&a[start..end]);
        let vec_b = V::from_slice(&b[start..end]);

        kernel(vec_a, vec_b).to_slice(&mut output[start..end]);
    }

    for i in chunks * lanes..len {
        output[i] = scalar_fallback(a[i], b[i]);
    }
}

/// Process a fused add/subtract on slices using a lane-vector kernel
///
/// Each input chunk is loaded once and feeds both the sum and the difference.
///
/// # Arguments
///
/// - `sum`: Output for `a[i] + b[i]`
/// - `diff`: Output for `a[i] - b[i]`
/// - `a`, `b`: Input slices
///
/// All four slices must have the same length.
#[inline(always)]
pub fn process_add_sub<V>(sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64])
where
    V: LaneVector,
{
    let len = a.len();
    assert_eq!(b.len(), len, "Input slices must have the same length");
    assert_eq!(sum.len(), len, "Sum slice must match input length");
    assert_eq!(diff.len(), len, "Diff slice must match input length");

    let lanes = V::LANES;
    let chunks = len / lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let end = start + lanes;

        let vec_a = V::from_slice(&a[start..end]);
        let vec_b = V::from_slice(&b[start..end]);

        vec_a.add(vec_b).to_slice(&mut sum[start..end]);
        vec_a.sub(vec_b).to_slice(&mut diff[start..end]);
    }

    // Remainder
    for i in chunks * lanes..len {
        sum[i] = a[i].wrapping_add(b[i]);
        diff[i] = a[i].wrapping_sub(b[i]);
    }
}
