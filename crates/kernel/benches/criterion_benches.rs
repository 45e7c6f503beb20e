//! Criterion benchmarks for addsub-kernel
//!
//! Measures fused add/subtract throughput per backend.
//! Run with: cargo bench --bench criterion_benches

use addsub_kernel::{BackendType, CombineContext};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const SIZES: [usize; 4] = [4, 64, 1024, 16384];

fn inputs(len: usize) -> (Vec<i64>, Vec<i64>) {
    let a = (0..len as i64).collect();
    let b = (0..len as i64).map(|i| i * i).collect();
    (a, b)
}

/// Benchmark the fused operation on every backend the CPU can run
fn bench_add_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_sub");

    for backend in BackendType::ALL {
        let Ok(ctx) = CombineContext::with_backend(backend) else {
            continue;
        };

        for len in SIZES {
            let (a, b) = inputs(len);
            let mut sum = vec![0i64; len];
            let mut diff = vec![0i64; len];

            group.throughput(Throughput::Elements(len as u64));
            group.bench_with_input(BenchmarkId::new(backend.name(), len), &len, |bencher, &len| {
                bencher.iter(|| {
                    ctx.add_sub(&mut sum, &mut diff, black_box(&a), black_box(&b), len)
                        .unwrap();
                    black_box((&sum, &diff));
                })
            });
        }
    }

    group.finish();
}

/// Separate add + sub passes, for comparison with the fused loop
fn bench_add_then_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_then_sub");
    let ctx = CombineContext::new();

    for len in SIZES {
        let (a, b) = inputs(len);
        let mut sum = vec![0i64; len];
        let mut diff = vec![0i64; len];

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new(ctx.backend_name(), len),
            &len,
            |bencher, _| {
                bencher.iter(|| {
                    ctx.add(black_box(&a), black_box(&b), &mut sum);
                    ctx.sub(black_box(&a), black_box(&b), &mut diff);
                    black_box((&sum, &diff));
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_add_sub, bench_add_then_sub);
criterion_main!(benches);
