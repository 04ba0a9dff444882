// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Benchmarks for Z(t) and for a small end-to-end count.
//!
//! The cost of Z(t) grows with sqrt(t), the length of the main sum.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use riemann_siegel::{z, SampleGrid, Strategy, ZeroCounter};
use strum::IntoEnumIterator;

fn bench_z(c: &mut Criterion) {
    let mut group = c.benchmark_group("z");
    for &t in &[1.0e2, 1.0e4, 1.0e6, 1.0e8] {
        group.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, &t| {
            b.iter(|| z(black_box(t)))
        });
    }
    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let grid = SampleGrid::new(10.0, 1000.0, 20.0).expect("valid grid");
    let mut group = c.benchmark_group("count_10_1000");
    group.sample_size(10);
    for strategy in Strategy::iter() {
        let counter = ZeroCounter::new(strategy).with_buffer_len(4096);
        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| counter.count(black_box(&grid)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_z, bench_count);
criterion_main!(benches);
