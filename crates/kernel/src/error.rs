//! Error types for the checked combine API

use crate::simd::BackendType;
use core::fmt;

/// Which buffer a `count` was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// Sum output
    Sum,
    /// Difference output
    Diff,
    /// First input
    A,
    /// Second input
    B,
}

impl Buffer {
    /// Short name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Buffer::Sum => "sum",
            Buffer::Diff => "diff",
            Buffer::A => "a",
            Buffer::B => "b",
        }
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by `CombineContext`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    /// `count` is larger than one of the buffers
    CountExceedsCapacity {
        /// Requested element count
        count: usize,
        /// First buffer found too short
        buffer: Buffer,
        /// Length of that buffer
        capacity: usize,
    },

    /// Requested backend is not compiled in or not supported by this CPU
    BackendUnavailable {
        /// The backend that was requested
        backend: BackendType,
    },
}

impl fmt::Display for CombineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineError::CountExceedsCapacity {
                count,
                buffer,
                capacity,
            } => write!(
                f,
                "count {count} exceeds capacity of buffer '{buffer}' ({capacity} elements)"
            ),
            CombineError::BackendUnavailable { backend } => write!(
                f,
                "backend '{backend}' is not available in this build or on this CPU"
            ),
        }
    }
}

impl core::error::Error for CombineError {}
