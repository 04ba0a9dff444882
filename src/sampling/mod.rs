// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sampling Driver: counts sign changes of Z(t) over a range, in parallel.
//!
//! ## Module Structure
//!
//! - `grid`: the sample heights for `(LOWER, UPPER, SAMP)`
//! - `strategy`: the three evaluation strategies and the compile-time default
//! - `counter`: the parallel count with chunk-boundary stitching

pub mod counter;
pub mod grid;
pub mod strategy;

pub use counter::{
    count_zeros, is_coarse, is_sign_change, CountReport, ZeroCounter, Z_BUFFER_LENGTH,
};
pub use grid::SampleGrid;
pub use strategy::{Strategy, DEFAULT_STRATEGY};
