// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use riemann_siegel::{SampleGrid, Strategy, ZeroCounter};

/// Count zeros of Z with an explicit strategy.
pub fn count_with(lower: f64, upper: f64, samp: f64, strategy: Strategy) -> u64 {
    let grid = SampleGrid::new(lower, upper, samp).expect("valid grid");
    ZeroCounter::new(strategy)
        .count(&grid)
        .expect("count succeeds")
        .zeros
}

/// Count zeros of Z with the default strategy.
#[allow(dead_code)]
pub fn count(lower: f64, upper: f64, samp: f64) -> u64 {
    riemann_siegel::count_zeros(lower, upper, samp).expect("count succeeds")
}
