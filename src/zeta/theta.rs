// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Riemann-Siegel theta function.

use super::constants::{INV_TWO_PI, PI, PI_OVER_8, THETA_SERIES};

/// Riemann-Siegel theta function, by its asymptotic expansion in 1/t.
///
/// The tail is evaluated in Horner form over 1/t², with a single division.
/// The expansion is accurate for t ≳ 10 and meaningless for t ≤ 0.
#[inline]
pub fn theta(t: f64) -> f64 {
    let t_inv = 1.0 / t;
    let t_inv2 = t_inv * t_inv;
    let [c1, c2, c3, c4, c5] = THETA_SERIES;
    t * 0.5 * ((t * INV_TWO_PI).ln() - 1.0) - PI_OVER_8
        + t_inv * (c1 + t_inv2 * (c2 + t_inv2 * (c3 + t_inv2 * (c4 + t_inv2 * c5))))
}

/// Analytic estimate of the number of zeros with imaginary part in (0, upper].
///
/// This is theta(upper)/π, the smooth part of the Riemann-von Mangoldt formula
/// without the `+1`. It is independent of any sampling.
pub fn estimate_zero_count(upper: f64) -> f64 {
    theta(upper) / PI
}
