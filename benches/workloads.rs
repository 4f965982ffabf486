//! Criterion suites for the catalog workloads at reduced sizes.
//!
//! The catalog itself runs single-shot at full size; these measure the same
//! loop bodies with warm-up and repetition.

use benchmark_one::workloads::{
    accumulate, calculate_pi, complex_level_1, complex_level_2, eratosthenes, matrix_multiplication,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    for n in [10_000u64, 100_000] {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::new("basic", n), &n, |b, &n| {
            b.iter(|| accumulate(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("complex1", n), &n, |b, &n| {
            b.iter(|| complex_level_1(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("complex2", n), &n, |b, &n| {
            b.iter(|| complex_level_2(black_box(n)))
        });
    }
    group.finish();
}

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    for n in [10_000u32, 1_000_000] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| eratosthenes(black_box(n)))
        });
    }
    group.finish();
}

fn bench_pi(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi");
    for k in [1_000usize, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| calculate_pi(black_box(k)))
        });
    }
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    group.sample_size(20);
    for size in [32usize, 128] {
        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| matrix_multiplication(black_box(size)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_sieve, bench_pi, bench_matrix);
criterion_main!(benches);
