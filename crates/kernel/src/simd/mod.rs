//! Backend selection and dispatch
//!
//! - `context`: CombineContext unified API (PRIMARY PUBLIC INTERFACE)
//! - `backend`: CombineBackend trait definition
//! - `helpers`: chunking loops shared by all backends (crate-private)
//! - `dispatcher`: CPU feature detection and BackendType selection
//! - Backends: `scalar`, `avx2`, `avx512`, `neon`

pub mod backend;
pub mod context;
pub mod dispatcher;
pub(crate) mod helpers;
pub mod scalar;

#[cfg(all(feature = "avx2", target_arch = "x86_64"))]
pub mod avx2;

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
pub mod avx512;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub mod neon;

pub use backend::CombineBackend;
pub use context::CombineContext;
pub use dispatcher::{BackendDispatcher, BackendType, CpuFeatures};
pub use scalar::ScalarBackend;

#[cfg(all(feature = "avx2", target_arch = "x86_64"))]
pub use avx2::Avx2Backend;

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
pub use avx512::Avx512Backend;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use neon::NeonBackend;
