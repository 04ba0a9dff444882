// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The grid of sample heights t_i = lower + i·step.

use crate::error::{Error, Result};
use crate::zeta::constants::TWO_PI;

/// Evenly spaced sample heights over `[lower, upper]`.
///
/// `num_samples = ⌊(upper - lower)·samp + 1⌋`, so `lower` is always sampled and
/// `upper` is sampled whenever it lies on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    lower: f64,
    upper: f64,
    step: f64,
    num_samples: u64,
}

impl SampleGrid {
    /// Validate `(lower, upper, samp)` and build the grid.
    pub fn new(lower: f64, upper: f64, samp: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(Error::EmptyRange { lower, upper });
        }
        if !samp.is_finite() || samp <= 0.0 {
            return Err(Error::InvalidDensity(samp));
        }
        if lower <= 0.0 {
            return Err(Error::NonPositiveHeight(lower));
        }

        let num_samples = ((upper - lower) * samp + 1.0).floor();
        if num_samples >= u64::MAX as f64 {
            return Err(Error::SampleCountOverflow(num_samples));
        }

        Ok(SampleGrid {
            lower,
            upper,
            step: 1.0 / samp,
            num_samples: num_samples as u64,
        })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of sample points; always at least 1.
    pub fn num_samples(&self) -> u64 {
        self.num_samples
    }

    /// Number of adjacent pairs checked for a sign change.
    pub fn num_pairs(&self) -> u64 {
        self.num_samples - 1
    }

    /// Height of sample `i`.
    ///
    /// Every strategy derives heights from here, so the same index always maps
    /// to the same bits.
    #[inline]
    pub fn t_at(&self, i: u64) -> f64 {
        self.lower + i as f64 * self.step
    }

    /// Samples per average gap between zeros at the top of the range.
    ///
    /// Zeros near height T are on average 2π/ln(T/2π) apart.
    pub fn samples_per_zero_gap(&self) -> f64 {
        let density = (self.upper / TWO_PI).ln();
        if density <= 0.0 {
            return f64::INFINITY;
        }
        TWO_PI / density / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(SampleGrid::new(10.0, 1000.0, 100.0).unwrap().num_samples(), 99_001);
        assert_eq!(SampleGrid::new(10.0, 10000.0, 10.0).unwrap().num_samples(), 99_901);
        assert_eq!(SampleGrid::new(100.0, 200.0, 8.0).unwrap().num_samples(), 801);
    }

    #[test]
    fn test_endpoints_on_grid() {
        let grid = SampleGrid::new(100.0, 200.0, 8.0).unwrap();
        assert_eq!(grid.t_at(0), 100.0);
        assert_eq!(grid.t_at(grid.num_pairs()), 200.0);
    }

    #[test]
    fn test_tiny_range_has_one_sample() {
        let grid = SampleGrid::new(50.0, 50.01, 1.0).unwrap();
        assert_eq!(grid.num_samples(), 1);
        assert_eq!(grid.num_pairs(), 0);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            SampleGrid::new(100.0, 100.0, 1.0),
            Err(Error::EmptyRange { .. })
        ));
        assert!(matches!(
            SampleGrid::new(100.0, 50.0, 1.0),
            Err(Error::EmptyRange { .. })
        ));
        assert!(matches!(
            SampleGrid::new(f64::NAN, 50.0, 1.0),
            Err(Error::EmptyRange { .. })
        ));
        assert!(matches!(
            SampleGrid::new(10.0, 50.0, 0.0),
            Err(Error::InvalidDensity(_))
        ));
        assert!(matches!(
            SampleGrid::new(10.0, 50.0, -3.0),
            Err(Error::InvalidDensity(_))
        ));
        assert!(matches!(
            SampleGrid::new(-10.0, 50.0, 1.0),
            Err(Error::NonPositiveHeight(_))
        ));
        assert!(matches!(
            SampleGrid::new(0.0, 50.0, 1.0),
            Err(Error::NonPositiveHeight(_))
        ));
    }

    #[test]
    fn test_sample_count_overflow() {
        match SampleGrid::new(1.0, 1.0e15, 1.0e6) {
            Err(Error::SampleCountOverflow(samples)) => assert!(samples > 1.0e20),
            other => panic!("expected overflow, got {:?}", other),
        }
        assert!(SampleGrid::new(1.0, 1.0e15, 1.0e-3).is_ok());
    }

    #[test]
    fn test_samples_per_zero_gap() {
        // Near t = 10^5 zeros are about 0.64 apart.
        let grid = SampleGrid::new(10.0, 100000.0, 10.0).unwrap();
        assert!((grid.samples_per_zero_gap() - 6.5).abs() < 0.2);
        let grid = SampleGrid::new(1.0, 5.0, 1.0).unwrap();
        assert_eq!(grid.samples_per_zero_gap(), f64::INFINITY);
    }

    proptest! {
        #[test]
        fn prop_sample_count_formula(lower in 1.0f64..1.0e4, width in 0.5f64..1.0e3, samp in 0.1f64..50.0) {
            let grid = SampleGrid::new(lower, lower + width, samp).unwrap();
            let expected = (((lower + width) - lower) * samp + 1.0).floor() as u64;
            prop_assert_eq!(grid.num_samples(), expected);
            prop_assert!(grid.num_samples() >= 1);
        }
    }
}
