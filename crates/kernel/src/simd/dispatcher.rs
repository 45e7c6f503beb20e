//! Runtime Backend Dispatcher
//!
//! This module provides CPU feature detection and backend selection.
//! On x86_64, it detects AVX2/AVX-512 support and selects the widest backend.
//! On aarch64, NEON is assumed always present (compile-time selection).

use super::backend::CombineBackend;
use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

/// CPU Feature Detection Results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    /// AVX2 support available (x86_64)
    pub has_avx2: bool,

    /// AVX-512 Foundation (x86_64); enough for 64-bit integer add/sub
    pub has_avx512_f: bool,
}

impl CpuFeatures {
    /// Detect CPU features
    ///
    /// # Platform Behavior
    /// - **x86_64 + `runtime-dispatch`**: CPUID detection using the `cpufeatures` crate
    /// - **x86_64 without `runtime-dispatch`**: only what the build enables via
    ///   `-C target-feature`
    /// - **everything else**: all fields false (NEON needs no detection)
    ///
    /// # Performance
    /// - First call: ~100-200 CPU cycles (CPUID instruction)
    /// - Subsequent calls: cached by cpufeatures, an atomic load
    pub fn detect() -> Self {
        #[cfg(all(feature = "runtime-dispatch", target_arch = "x86_64"))]
        {
            cpufeatures::new!(cpuid_avx2, "avx2");
            cpufeatures::new!(cpuid_avx512f, "avx512f");

            Self {
                has_avx2: cpuid_avx2::get(),
                has_avx512_f: cpuid_avx512f::get(),
            }
        }

        #[cfg(not(all(feature = "runtime-dispatch", target_arch = "x86_64")))]
        {
            Self {
                has_avx2: cfg!(all(target_arch = "x86_64", target_feature = "avx2")),
                has_avx512_f: cfg!(all(target_arch = "x86_64", target_feature = "avx512f")),
            }
        }
    }
}

/// Backend Type Enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendType {
    /// Scalar fallback (no SIMD, always available)
    Scalar,

    /// AVX2 backend (x86_64, 256-bit SIMD)
    Avx2,

    /// AVX-512 backend (x86_64, 512-bit SIMD, experimental)
    Avx512,

    /// NEON backend (aarch64, 128-bit SIMD)
    Neon,
}

impl BackendType {
    /// Every backend type, widest last
    pub const ALL: [BackendType; 4] = [
        BackendType::Scalar,
        BackendType::Neon,
        BackendType::Avx2,
        BackendType::Avx512,
    ];

    /// Select the backend for the detected features
    ///
    /// Forced backend features win; otherwise priority is AVX-512 → AVX2 → NEON → Scalar,
    /// restricted to backends compiled into this build.
    // Forced features return early; `features` is unread on non-x86 targets
    #[allow(unreachable_code, unused_variables)]
    pub fn select(features: CpuFeatures) -> Self {
        // Check forced backend flags first (deterministic testing)
        #[cfg(feature = "force-scalar")]
        {
            return BackendType::Scalar;
        }

        #[cfg(feature = "force-avx2")]
        {
            return BackendType::Avx2;
        }

        #[cfg(feature = "force-avx512")]
        {
            return BackendType::Avx512;
        }

        #[cfg(feature = "force-neon")]
        {
            return BackendType::Neon;
        }

        #[cfg(target_arch = "x86_64")]
        {
            #[cfg(feature = "avx512")]
            if features.has_avx512_f {
                return BackendType::Avx512;
            }

            #[cfg(feature = "avx2")]
            if features.has_avx2 {
                return BackendType::Avx2;
            }

            BackendType::Scalar
        }

        #[cfg(target_arch = "aarch64")]
        {
            #[cfg(feature = "neon")]
            {
                BackendType::Neon
            }

            #[cfg(not(feature = "neon"))]
            {
                BackendType::Scalar
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            BackendType::Scalar
        }
    }

    /// Whether this backend is compiled into the build
    pub fn is_compiled(self) -> bool {
        match self {
            BackendType::Scalar => true,
            BackendType::Avx2 => cfg!(all(feature = "avx2", target_arch = "x86_64")),
            BackendType::Avx512 => cfg!(all(feature = "avx512", target_arch = "x86_64")),
            BackendType::Neon => cfg!(all(feature = "neon", target_arch = "aarch64")),
        }
    }

    /// Whether this backend is compiled in and can run on a CPU with `features`
    pub fn is_supported(self, features: CpuFeatures) -> bool {
        self.is_compiled()
            && match self {
                BackendType::Scalar | BackendType::Neon => true,
                BackendType::Avx2 => features.has_avx2,
                BackendType::Avx512 => features.has_avx512_f,
            }
    }

    /// Backend name for logging/debugging
    ///
    /// # Returns
    /// Static string: "scalar", "avx2", "avx512", or "neon"
    pub fn name(self) -> &'static str {
        match self {
            BackendType::Scalar => "scalar",
            BackendType::Avx2 => "avx2",
            BackendType::Avx512 => "avx512",
            BackendType::Neon => "neon",
        }
    }

    /// Number of `i64` lanes processed per vector instruction
    pub fn lanes(self) -> usize {
        match self {
            BackendType::Scalar => 1,
            BackendType::Neon => 2,
            BackendType::Avx2 => 4,
            BackendType::Avx512 => 8,
        }
    }

    fn to_code(self) -> u8 {
        match self {
            BackendType::Scalar => 1,
            BackendType::Avx2 => 2,
            BackendType::Avx512 => 3,
            BackendType::Neon => 4,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BackendType::Scalar),
            2 => Some(BackendType::Avx2),
            3 => Some(BackendType::Avx512),
            4 => Some(BackendType::Neon),
            _ => None,
        }
    }
}

/// Backend picked by the first `BackendDispatcher::global` call (0 = not yet picked)
static GLOBAL_BACKEND: AtomicU8 = AtomicU8::new(0);

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Type aliases for function pointers to reduce complexity
type BinaryOpFn = fn(&[i64], &[i64], &mut [i64]);
type AddSubFn = fn(&mut [i64], &mut [i64], &[i64], &[i64]);

/// Runtime Backend Dispatcher
///
/// Function pointer table for the selected backend. Built once, then every call is
/// a single indirect call with no per-call feature check.
#[derive(Clone, Debug)]
pub struct BackendDispatcher {
    add_fn: BinaryOpFn,
    sub_fn: BinaryOpFn,
    add_sub_fn: AddSubFn,
    backend_type: BackendType,
}

impl BackendDispatcher {
    /// Detect CPU features and build the table for the selected backend
    ///
    /// A forced backend the CPU cannot run falls back to scalar.
    pub fn init() -> Self {
        let features = CpuFeatures::detect();
        let backend_type = BackendType::select(features);
        log::debug!("detected CPU features: {features:?}");

        match Self::for_backend(backend_type) {
            Some(dispatcher) => dispatcher,
            None => {
                log::warn!("backend '{backend_type}' is not available, falling back to scalar");
                Self::for_scalar()
            }
        }
    }

    /// Process-wide dispatcher
    ///
    /// The first call runs `init` (detection, selection, logging) and caches the
    /// chosen backend. Later calls rebuild the table from the cache without
    /// detecting or logging again. Racing first calls select the same backend.
    pub fn global() -> Self {
        let cached = BackendType::from_code(GLOBAL_BACKEND.load(Ordering::Acquire));
        if let Some(dispatcher) = cached.and_then(Self::build) {
            return dispatcher;
        }

        let dispatcher = Self::init();
        GLOBAL_BACKEND.store(dispatcher.backend_type.to_code(), Ordering::Release);
        dispatcher
    }

    /// Build the table for a specific backend
    ///
    /// Returns `None` if the backend is not compiled in or the CPU lacks the
    /// required instruction set.
    pub fn for_backend(backend_type: BackendType) -> Option<Self> {
        if !backend_type.is_supported(CpuFeatures::detect()) {
            return None;
        }

        let dispatcher = Self::build(backend_type)?;
        log::debug!("selected backend: {}", dispatcher.backend_name());
        Some(dispatcher)
    }

    /// Table for a backend already known to be supported
    fn build(backend_type: BackendType) -> Option<Self> {
        let dispatcher = match backend_type {
            BackendType::Scalar => Self::for_scalar(),
            #[cfg(all(feature = "avx2", target_arch = "x86_64"))]
            BackendType::Avx2 => Self::from_backend::<super::avx2::Avx2Backend>(backend_type),
            #[cfg(all(feature = "avx512", target_arch = "x86_64"))]
            BackendType::Avx512 => {
                Self::from_backend::<super::avx512::Avx512Backend>(backend_type)
            }
            #[cfg(all(feature = "neon", target_arch = "aarch64"))]
            BackendType::Neon => Self::from_backend::<super::neon::NeonBackend>(backend_type),
            #[allow(unreachable_patterns)]
            _ => return None,
        };

        Some(dispatcher)
    }

    fn for_scalar() -> Self {
        Self::from_backend::<super::scalar::ScalarBackend>(BackendType::Scalar)
    }

    fn from_backend<B: CombineBackend>(backend_type: BackendType) -> Self {
        debug_assert_eq!(B::name(), backend_type.name());
        Self {
            add_fn: B::add,
            sub_fn: B::sub,
            add_sub_fn: B::add_sub,
            backend_type,
        }
    }

    /// Element-wise addition (equal-length slices)
    #[inline]
    pub fn add(&self, a: &[i64], b: &[i64], output: &mut [i64]) {
        (self.add_fn)(a, b, output)
    }

    /// Element-wise subtraction (equal-length slices)
    #[inline]
    pub fn sub(&self, a: &[i64], b: &[i64], output: &mut [i64]) {
        (self.sub_fn)(a, b, output)
    }

    /// Fused add/subtract (equal-length slices)
    #[inline]
    pub fn add_sub(&self, sum: &mut [i64], diff: &mut [i64], a: &[i64], b: &[i64]) {
        (self.add_sub_fn)(sum, diff, a, b)
    }

    /// Selected backend
    pub fn backend_type(&self) -> BackendType {
        self.backend_type
    }

    /// Selected backend name
    pub fn backend_name(&self) -> &'static str {
        self.backend_type.name()
    }
}
