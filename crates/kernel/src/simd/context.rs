//! Combine Context - Unified Public API
//!
//! `CombineContext` is the one type callers need. It owns the backend dispatcher
//! and adds the caller-side checks the raw backends leave out: a `count` is
//! validated against every buffer before any backend code runs.
//!
//! # Example Usage
//!
//! ```rust
//! use addsub_kernel::CombineContext;
//!
//! let ctx = CombineContext::new();
//!
//! let a = [1i64, 2, 3, 4];
//! let b = [4i64, 9, 16, 25];
//! let mut sum = [0i64; 4];
//! let mut diff = [0i64; 4];
//!
//! ctx.add_sub(&mut sum, &mut diff, &a, &b, 4).unwrap();
//! assert_eq!(sum, [5, 11, 19, 29]);
//! assert_eq!(diff, [-3, -7, -13, -21]);
//! ```

use super::dispatcher::{BackendDispatcher, BackendType};
use crate::error::{Buffer, CombineError};

/// Combine Context - Unified Public API
///
/// Cheap to clone (a handful of function pointers) and `Send + Sync`. Build it once
/// at startup and reuse it.
///
/// # Platform Behavior
///
/// - **`runtime-dispatch` enabled**: `new()` runs CPUID once and picks
///   AVX-512 → AVX2 → Scalar on x86_64
/// - **aarch64**: NEON when compiled in
/// - **`force-*` features**: that backend, when the CPU can run it
#[derive(Clone, Debug)]
pub struct CombineContext {
    dispatcher: BackendDispatcher,
}

impl CombineContext {
    /// Initialize with the best available backend
    pub fn new() -> Self {
        Self {
            dispatcher: BackendDispatcher::init(),
        }
    }

    /// Initialize with a specific backend
    ///
    /// # Errors
    ///
    /// `CombineError::BackendUnavailable` if the backend is not compiled into this
    /// build or the CPU lacks the instruction set.
    pub fn with_backend(backend: BackendType) -> Result<Self, CombineError> {
        BackendDispatcher::for_backend(backend)
            .map(|dispatcher| Self { dispatcher })
            .ok_or(CombineError::BackendUnavailable { backend })
    }

    /// Get backend name for logging/debugging
    ///
    /// # Returns
    ///
    /// Static string: "scalar", "avx2", "avx512", or "neon"
    pub fn backend_name(&self) -> &'static str {
        self.dispatcher.backend_name()
    }

    /// Selected backend
    pub fn backend_type(&self) -> BackendType {
        self.dispatcher.backend_type()
    }

    /// Element-wise add and subtract over the first `count` elements
    ///
    /// Writes `sum[i] = a[i] + b[i]` and `diff[i] = a[i] - b[i]` for `i` in
    /// `0..count`. Elements at `count` and beyond are left untouched. Overflow wraps.
    ///
    /// # Errors
    ///
    /// `CombineError::CountExceedsCapacity` if `count` is larger than any of the
    /// four slices; nothing is written in that case.
    pub fn add_sub(
        &self,
        sum: &mut [i64],
        diff: &mut [i64],
        a: &[i64],
        b: &[i64],
        count: usize,
    ) -> Result<(), CombineError> {
        check_capacity(count, Buffer::Sum, sum.len())?;
        check_capacity(count, Buffer::Diff, diff.len())?;
        check_capacity(count, Buffer::A, a.len())?;
        check_capacity(count, Buffer::B, b.len())?;

        if count == 0 {
            return Ok(());
        }

        self.dispatcher
            .add_sub(&mut sum[..count], &mut diff[..count], &a[..count], &b[..count]);
        Ok(())
    }

    /// Element-wise addition: output[i] = a[i] + b[i]
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    #[inline]
    pub fn add(&self, a: &[i64], b: &[i64], output: &mut [i64]) {
        self.dispatcher.add(a, b, output)
    }

    /// Element-wise subtraction: output[i] = a[i] - b[i]
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    #[inline]
    pub fn sub(&self, a: &[i64], b: &[i64], output: &mut [i64]) {
        self.dispatcher.sub(a, b, output)
    }
}

impl Default for CombineContext {
    fn default() -> Self {
        Self::new()
    }
}

fn check_capacity(count: usize, buffer: Buffer, capacity: usize) -> Result<(), CombineError> {
    if count > capacity {
        return Err(CombineError::CountExceedsCapacity {
            count,
            buffer,
            capacity,
        });
    }
    Ok(())
}
