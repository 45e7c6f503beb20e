//! Lane-vector implementations
//!
//! One packed `i64` vector type per instruction set. Which of these a build can
//! execute is decided at runtime by `simd::dispatcher`; the types themselves are
//! only gated by target architecture and cargo feature.

// Scalar lanes (always available as fallback)
pub mod scalar;

#[cfg(all(feature = "avx2", target_arch = "x86_64"))]
pub mod avx2;

#[cfg(all(feature = "avx512", target_arch = "x86_64"))]
pub mod avx512;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub mod neon;
