// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three strategies compare the same pairs and must agree exactly,
//! however the buffered strategy's chunks fall.

mod common;

use common::count_with;
use riemann_siegel::{SampleGrid, Strategy, ZeroCounter};
use strum::IntoEnumIterator;

#[test]
fn test_all_strategies_agree_on_z() {
    let counts: Vec<u64> = Strategy::iter()
        .map(|strategy| count_with(10.0, 2000.0, 20.0, strategy))
        .collect();
    assert!(counts.windows(2).all(|pair| pair[0] == pair[1]), "{:?}", counts);
}

#[test]
fn test_buffered_chunk_sizes_agree() {
    let grid = SampleGrid::new(10.0, 2000.0, 20.0).unwrap();
    let expected = ZeroCounter::new(Strategy::Materialize)
        .count(&grid)
        .unwrap()
        .zeros;

    // Odd sizes, a power of two, and exactly the sample count.
    for buffer_len in [1, 2, 97, 1024, 4097, 39_801, 1_000_000] {
        let report = ZeroCounter::new(Strategy::Buffered)
            .with_buffer_len(buffer_len)
            .count(&grid)
            .unwrap();
        assert_eq!(report.zeros, expected, "buffer_len {}", buffer_len);
    }
}

#[test]
fn test_buffered_stitch_evaluations() {
    let grid = SampleGrid::new(10.0, 110.0, 10.0).unwrap(); // 1001 samples
    let report = ZeroCounter::new(Strategy::Buffered)
        .with_buffer_len(100)
        .count(&grid)
        .unwrap();
    // 11 chunks, 10 stitched edges.
    assert_eq!(report.samples, 1001);
    assert_eq!(report.evaluations, 1011);
}

#[test]
fn test_dedicated_pool_same_count() {
    let grid = SampleGrid::new(10.0, 1000.0, 20.0).unwrap();
    let counter = ZeroCounter::new(Strategy::Recompute);
    let global = counter.count(&grid).unwrap();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(2)
        .build()
        .unwrap();
    let pooled = pool.install(|| counter.count(&grid)).unwrap();
    assert_eq!(global.zeros, pooled.zeros);
    assert_eq!(global.zeros, 649);
}
