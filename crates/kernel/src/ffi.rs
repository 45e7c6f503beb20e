//! C ABI entry point
//!
//! Exports `addsub_4` with the signature C callers declare:
//!
//! ```c
//! void addsub_4(long *s, long *d, const long *a, const long *b, size_t n);
//! ```
//!
//! `long` is taken as 64 bits (LP64). The name comes from the four-lane AVX2 kernel
//! it was first written for; any backend may service the call. The backend is
//! selected on the first call and reused afterwards.

use crate::simd::BackendDispatcher;
use core::slice;

/// Element-wise add and subtract over raw buffers
///
/// Writes `s[i] = a[i] + b[i]` and `d[i] = a[i] - b[i]` for `i` in `0..n`, wrapping
/// on overflow. Nothing is read or written when `n == 0`.
///
/// # Safety
///
/// `n` is not checked against any buffer. The caller must guarantee that for
/// `n > 0`:
///
/// - `a` and `b` are valid for reads of `n` `i64`s
/// - `s` and `d` are valid for writes of `n` `i64`s
/// - `s` and `d` do not overlap each other or either input
///
/// Passing an `n` larger than any buffer is undefined behavior. Safe Rust callers
/// should use `CombineContext::add_sub`, which validates `count` first.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn addsub_4(
    s: *mut i64,
    d: *mut i64,
    a: *const i64,
    b: *const i64,
    n: usize,
) {
    if n == 0 {
        return;
    }

    // SAFETY: upheld by the caller per the contract above
    let (sum, diff, a, b) = unsafe {
        (
            slice::from_raw_parts_mut(s, n),
            slice::from_raw_parts_mut(d, n),
            slice::from_raw_parts(a, n),
            slice::from_raw_parts(b, n),
        )
    };

    BackendDispatcher::global().add_sub(sum, diff, a, b);
}
