// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel sign-change counting over a [`SampleGrid`].
//!
//! A zero is reported for every adjacent pair `(t_{i-1}, t_i)`, `1 <= i < NUMSAMPLES`,
//! whose Z values have strictly opposite signs. A sample that is exactly 0.0
//! (or NaN) never forms a sign change with either neighbour, so a root landing
//! exactly on a sample point is not counted.
//!
//! Counts are combined with rayon's reductions; no worker writes shared state.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::grid::SampleGrid;
use super::strategy::Strategy;
use crate::error::{Error, Result};
use crate::zeta::z;

/// Default chunk size of the buffered strategy: 32 Mi doubles (256 MB).
pub const Z_BUFFER_LENGTH: usize = 33_554_432;

/// Below this many samples per average zero gap, nearby zeros are likely missed.
pub const COARSE_SAMPLING_THRESHOLD: f64 = 8.0;

/// True when one value is strictly negative and the other strictly positive.
#[inline]
pub fn is_sign_change(prev: f64, next: f64) -> bool {
    (prev < 0.0 && next > 0.0) || (prev > 0.0 && next < 0.0)
}

/// True when the grid is too sparse for the zero density at its top end.
pub fn is_coarse(grid: &SampleGrid) -> bool {
    grid.samples_per_zero_gap() < COARSE_SAMPLING_THRESHOLD
}

/// Outcome of one counting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountReport {
    /// Sign changes found.
    pub zeros: u64,
    /// Points on the grid.
    pub samples: u64,
    /// Z evaluations performed.
    pub evaluations: u64,
}

/// Counts sign changes of a function over a grid with a chosen strategy.
#[derive(Debug, Clone)]
pub struct ZeroCounter {
    strategy: Strategy,
    buffer_len: usize,
}

impl Default for ZeroCounter {
    fn default() -> Self {
        ZeroCounter::new(Strategy::default())
    }
}

impl ZeroCounter {
    pub fn new(strategy: Strategy) -> Self {
        ZeroCounter {
            strategy,
            buffer_len: Z_BUFFER_LENGTH,
        }
    }

    /// Chunk size for [`Strategy::Buffered`]; ignored by the other strategies.
    pub fn with_buffer_len(mut self, buffer_len: usize) -> Self {
        self.buffer_len = buffer_len;
        self
    }

    /// Count sign changes of Z over `grid`.
    pub fn count(&self, grid: &SampleGrid) -> Result<CountReport> {
        self.count_with(grid, z)
    }

    /// Count sign changes of an arbitrary pure function over `grid`.
    pub fn count_with<F>(&self, grid: &SampleGrid, f: F) -> Result<CountReport>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        info!(
            strategy = %self.strategy,
            lower = grid.lower(),
            upper = grid.upper(),
            samples = grid.num_samples(),
            "counting sign changes"
        );
        if is_coarse(grid) {
            warn!(
                samples_per_gap = grid.samples_per_zero_gap(),
                "sampling is coarse for this height; close zero pairs may be missed"
            );
        }

        let report = match self.strategy {
            Strategy::Materialize => materialize(grid, &f)?,
            Strategy::Buffered => buffered(grid, &f, self.buffer_len)?,
            Strategy::Recompute => recompute(grid, &f),
        };

        info!(
            zeros = report.zeros,
            evaluations = report.evaluations,
            "counting finished"
        );
        Ok(report)
    }
}

/// Count zeros of Z over `[lower, upper]` at `samp` samples per unit, with the
/// default strategy.
pub fn count_zeros(lower: f64, upper: f64, samp: f64) -> Result<u64> {
    let grid = SampleGrid::new(lower, upper, samp)?;
    Ok(ZeroCounter::default().count(&grid)?.zeros)
}

/// Sign changes between neighbours inside one slice.
fn count_in_slice(values: &[f64]) -> u64 {
    values
        .par_windows(2)
        .filter(|pair| is_sign_change(pair[0], pair[1]))
        .count() as u64
}

/// Fill `buffer` with `f(t_{start + i})`.
fn fill<F>(buffer: &mut [f64], grid: &SampleGrid, start: u64, f: &F)
where
    F: Fn(f64) -> f64 + Sync,
{
    buffer
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, value)| *value = f(grid.t_at(start + i as u64)));
}

fn materialize<F>(grid: &SampleGrid, f: &F) -> Result<CountReport>
where
    F: Fn(f64) -> f64 + Sync,
{
    let samples = grid.num_samples();
    let len = usize::try_from(samples).map_err(|_| Error::TooManySamples {
        samples,
        limit: usize::MAX as u64,
    })?;

    let mut values = vec![0.0; len];
    fill(&mut values, grid, 0, f);

    Ok(CountReport {
        zeros: count_in_slice(&values),
        samples,
        evaluations: samples,
    })
}

fn buffered<F>(grid: &SampleGrid, f: &F, buffer_len: usize) -> Result<CountReport>
where
    F: Fn(f64) -> f64 + Sync,
{
    if buffer_len == 0 {
        return Err(Error::EmptyBuffer);
    }
    let samples = grid.num_samples();
    let capacity = (buffer_len as u64).min(samples) as usize;
    let mut buffer = vec![0.0; capacity];

    let mut report = CountReport {
        samples,
        ..CountReport::default()
    };
    let mut start = 0;
    while start < samples {
        let chunk_len = (samples - start).min(capacity as u64) as usize;
        let chunk = &mut buffer[..chunk_len];
        fill(chunk, grid, start, f);
        report.zeros += count_in_slice(chunk);
        report.evaluations += chunk_len as u64;

        // Stitch the pair spanning this chunk and the next.
        let next = start + chunk_len as u64;
        if next < samples {
            let head = f(grid.t_at(next));
            report.evaluations += 1;
            if is_sign_change(chunk[chunk_len - 1], head) {
                report.zeros += 1;
            }
        }

        debug!(start, end = next, zeros = report.zeros, "chunk done");
        start = next;
    }
    Ok(report)
}

fn recompute<F>(grid: &SampleGrid, f: &F) -> CountReport
where
    F: Fn(f64) -> f64 + Sync,
{
    let samples = grid.num_samples();
    let zeros = (1..samples)
        .into_par_iter()
        .filter(|&i| is_sign_change(f(grid.t_at(i - 1)), f(grid.t_at(i))))
        .count() as u64;

    CountReport {
        zeros,
        samples,
        evaluations: 2 * grid.num_pairs(),
    }
}
