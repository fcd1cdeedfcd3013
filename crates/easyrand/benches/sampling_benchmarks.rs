//! Criterion benchmarks for easyrand sampling.
//!
//! Benchmarks cover:
//! - Uniform sampling through the thread-local engine (integer and float)
//! - The same draws on an owned engine, to isolate thread-local overhead
//! - Distribution-driven sampling and bound generators

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use easyrand::{make_rng, make_rng_from, rand, rand_from, reseed_with, Engine};
use ::rand::Rng;
use rand_distr::{Bernoulli, Normal};

/// Benchmark uniform sampling via the thread-local engine and an owned one.
fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("thread_local_int", n_samples),
            &n_samples,
            |b, &n| {
                reseed_with(42);
                b.iter(|| {
                    let mut sum = 0u64;
                    for _ in 0..n {
                        sum += rand(0u64, 1_000u64);
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("thread_local_float", n_samples),
            &n_samples,
            |b, &n| {
                reseed_with(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rand(0.0, 1.0);
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("owned_engine_int", n_samples),
            &n_samples,
            |b, &n| {
                let mut engine = Engine::from_seed(42);
                b.iter(|| {
                    let mut sum = 0u64;
                    for _ in 0..n {
                        sum += engine.gen_range(0u64..=1_000u64);
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark distribution sampling and bound generators.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let n = 10_000;

    group.bench_function("normal_rand_from", |b| {
        let mut normal = Normal::new(0.0, 1.0).unwrap();
        b.iter(|| {
            let mut sum = 0.0;
            for _ in 0..n {
                let x: f64 = rand_from(&mut normal);
                sum += x;
            }
            black_box(sum)
        });
    });

    group.bench_function("uniform_generator", |b| {
        let unit = make_rng(0.0f32, 1.0f32);
        b.iter(|| {
            let mut sum = 0.0f32;
            for _ in 0..n {
                sum += unit();
            }
            black_box(sum)
        });
    });

    group.bench_function("bernoulli_generator", |b| {
        let mut coin = make_rng_from::<Bernoulli>(0.75).unwrap();
        b.iter(|| black_box((0..n).filter(|_| coin()).count()));
    });

    group.finish();
}

criterion_group!(benches, bench_uniform, bench_distributions);
criterion_main!(benches);
