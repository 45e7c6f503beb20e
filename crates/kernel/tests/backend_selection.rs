//! Backend Selection Integration Tests
//!
//! These tests verify that the dispatcher selects backends based on:
//! 1. CPU features detected at runtime
//! 2. Forced backend feature flags (for deterministic testing)

use addsub_kernel::{
    BackendDispatcher, BackendType, CombineBackend, CombineContext, CpuFeatures, LaneVector,
    ScalarBackend, ScalarLanes,
};

#[test]
fn test_cpu_feature_detection() {
    let features = CpuFeatures::detect();

    #[cfg(target_arch = "x86_64")]
    {
        // Values depend on the CPU; only print them
        println!("Detected CPU features:");
        println!("  AVX2: {}", features.has_avx2);
        println!("  AVX-512F: {}", features.has_avx512_f);
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        assert!(!features.has_avx2);
        assert!(!features.has_avx512_f);
    }
}

#[test]
fn test_backend_type_selection() {
    let features = CpuFeatures::detect();
    let backend_type = BackendType::select(features);

    println!("Selected backend: {:?}", backend_type);

    #[cfg(feature = "force-scalar")]
    assert_eq!(backend_type, BackendType::Scalar);

    #[cfg(feature = "force-avx2")]
    assert_eq!(backend_type, BackendType::Avx2);

    #[cfg(feature = "force-avx512")]
    assert_eq!(backend_type, BackendType::Avx512);

    #[cfg(feature = "force-neon")]
    assert_eq!(backend_type, BackendType::Neon);

    #[cfg(not(any(
        feature = "force-scalar",
        feature = "force-avx2",
        feature = "force-avx512",
        feature = "force-neon"
    )))]
    {
        // Selection never picks something the CPU cannot run
        assert!(backend_type.is_supported(features));

        #[cfg(target_arch = "x86_64")]
        {
            // Priority order: AVX-512 → AVX2 → Scalar
            let expected = if cfg!(feature = "avx512") && features.has_avx512_f {
                BackendType::Avx512
            } else if cfg!(feature = "avx2") && features.has_avx2 {
                BackendType::Avx2
            } else {
                BackendType::Scalar
            };
            assert_eq!(backend_type, expected);
        }

        #[cfg(target_arch = "aarch64")]
        {
            let expected = if cfg!(feature = "neon") {
                BackendType::Neon
            } else {
                BackendType::Scalar
            };
            assert_eq!(backend_type, expected);
        }
    }
}

#[test]
fn test_selection_without_cpu_features() {
    let backend_type = BackendType::select(CpuFeatures::default());

    #[cfg(not(any(
        feature = "force-scalar",
        feature = "force-avx2",
        feature = "force-avx512",
        feature = "force-neon"
    )))]
    {
        #[cfg(target_arch = "x86_64")]
        assert_eq!(backend_type, BackendType::Scalar);

        #[cfg(not(target_arch = "x86_64"))]
        let _ = backend_type;
    }

    #[cfg(any(
        feature = "force-scalar",
        feature = "force-avx2",
        feature = "force-avx512",
        feature = "force-neon"
    ))]
    let _ = backend_type;
}

#[test]
fn test_backend_name_consistency() {
    assert_eq!(BackendType::Scalar.name(), "scalar");
    assert_eq!(BackendType::Avx2.name(), "avx2");
    assert_eq!(BackendType::Avx512.name(), "avx512");
    assert_eq!(BackendType::Neon.name(), "neon");

    for backend in BackendType::ALL {
        assert_eq!(backend.to_string(), backend.name());
    }
}

#[test]
fn test_context_reports_dispatcher_backend() {
    let ctx = CombineContext::new();
    let dispatcher = BackendDispatcher::init();

    assert_eq!(ctx.backend_type(), dispatcher.backend_type());
    assert_eq!(ctx.backend_name(), dispatcher.backend_name());
}

#[test]
fn test_compiled_backends_for_target() {
    assert!(BackendType::Scalar.is_compiled());

    #[cfg(not(target_arch = "x86_64"))]
    {
        assert!(!BackendType::Avx2.is_compiled());
        assert!(!BackendType::Avx512.is_compiled());
    }

    #[cfg(not(target_arch = "aarch64"))]
    assert!(!BackendType::Neon.is_compiled());
}

#[test]
fn test_context_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CombineContext>();
}

#[test]
fn test_public_lane_surface_is_scalar() {
    // ScalarLanes is the only lane type reachable from outside the crate; SIMD
    // lanes are only used behind backends that check the CPU first.
    let mut out = [0i64; 1];
    ScalarLanes::splat(i64::MAX)
        .add(ScalarLanes::splat(1))
        .to_slice(&mut out);
    assert_eq!(out, [i64::MIN]);
    assert_eq!(ScalarLanes::LANES, BackendType::Scalar.lanes());

    let mut sum = [0i64; 4];
    let mut diff = [0i64; 4];
    ScalarBackend::add_sub(&mut sum, &mut diff, &[1, 2, 3, 4], &[4, 9, 16, 25]);
    assert_eq!(sum, [5, 11, 19, 29]);
    assert_eq!(diff, [-3, -7, -13, -21]);
}

#[test]
fn test_global_dispatcher_matches_init() {
    let global = BackendDispatcher::global();
    assert_eq!(global.backend_type(), BackendDispatcher::init().backend_type());
    assert_eq!(global.backend_type(), BackendDispatcher::global().backend_type());
}
