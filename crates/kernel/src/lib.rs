#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! addsub-kernel: element-wise add/subtract over `i64` slices
//!
//! One operation, several instruction sets. The crate picks the widest backend
//! the CPU supports at startup and exposes it through `CombineContext`.
//!
//! # Architecture
//!
//! - `traits`: `LaneVector`, the packed-lane abstraction
//! - `backends`: one lane type per instruction set (crate-private)
//! - `simd`: backend trait, shared loops, dispatcher, `CombineContext`
//! - `error`: `CombineError` for the checked API
//! - `ffi`: `addsub_4`, the C ABI symbol
//!
//! # Feature Flags
//!
//! - `runtime-dispatch`: Enable runtime CPU detection and backend selection
//! - `avx2`: Compile AVX2 backend (x86_64)
//! - `avx512`: Compile AVX-512 backend (x86_64, experimental)
//! - `neon`: Compile NEON backend (aarch64)
//! - `force-scalar`, `force-avx2`, `force-avx512`, `force-neon`: pin the backend
//!   for deterministic testing

pub(crate) mod backends;
pub mod error;
pub mod ffi;
pub mod simd;
pub mod traits;

pub use error::{Buffer, CombineError};
pub use traits::LaneVector;

// SIMD lane types are crate-private; only the CPU-checked backends reach them
pub use backends::scalar::ScalarLanes;

pub use simd::{
    BackendDispatcher, BackendType, CombineBackend, CombineContext, CpuFeatures, ScalarBackend,
};

#[cfg(all(feature = "avx2", target_arch = "x86_64"))]
pub use simd::Avx2Backend;

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
pub use simd::Avx512Backend;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use simd::NeonBackend;

// Only one forced backend may be selected
#[cfg(any(
    all(feature = "force-scalar", feature = "force-avx2"),
    all(feature = "force-scalar", feature = "force-avx512"),
    all(feature = "force-scalar", feature = "force-neon"),
    all(feature = "force-avx2", feature = "force-avx512"),
    all(feature = "force-avx2", feature = "force-neon"),
    all(feature = "force-avx512", feature = "force-neon"),
))]
compile_error!("Enable at most one force-* feature.");
