// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Z(t) by the Riemann-Siegel formula.
//!
//! With p = sqrt(t/2π), N = ⌊p⌋ and theta = theta(t):
//!
//! ```text
//! Z(t) = 2 Σ_{j=1}^{N} cos(theta - t ln j) / √j  +  R(t)
//! R(t) = (-1)^(N-1) (2π/t)^(1/4) Σ_{k=0}^{4} C_k(2(p - N) - 1) (2π/t)^(k/2)
//! ```
//!
//! See <http://mathworld.wolfram.com/Riemann-SiegelFormula.html>.

use super::coefficients::c;
use super::constants::{INV_TWO_PI, TWO_PI};
use super::theta::theta;

/// Main sum terms are accumulated in groups of this size.
const GROUP: usize = 4;

/// The Riemann-Siegel Z function.
///
/// Pure and re-entrant. The error of the asymptotic expansion shrinks as t
/// grows; below t ≈ 200 expect absolute errors around 1e-6. For t ≤ 0 the
/// result is NaN.
///
/// Summation order is fixed (groups of four, then the tail), so results are
/// bit-for-bit reproducible; a different grouping may change the last bits.
pub fn z(t: f64) -> f64 {
    let p = (t * INV_TWO_PI).sqrt();
    // NaN and negatives saturate to 0.
    let n = p as usize;
    let frac = p - n as f64;

    main_sum(t, theta(t), n) + remainder(t, frac, n)
}

/// `2 Σ_{j=1}^{n} cos(theta - t ln j) / √j`; zero when `n == 0`.
#[inline]
pub fn main_sum(t: f64, theta: f64, n: usize) -> f64 {
    let term = |j: f64| 1.0 / j.sqrt() * (theta - t * j.ln()).cos();

    let grouped = n - n % GROUP;
    let mut sum = 0.0;
    let mut j = 1;
    while j <= grouped {
        let base = j as f64;
        sum += term(base);
        sum += term(base + 1.0);
        sum += term(base + 2.0);
        sum += term(base + 3.0);
        j += GROUP;
    }
    for j in grouped + 1..=n {
        sum += term(j as f64);
    }
    sum + sum
}

/// Correction term R for fractional part `frac` of sqrt(t/2π) and `n` main terms.
#[inline]
pub fn remainder(t: f64, frac: f64, n: usize) -> f64 {
    let z = 2.0 * frac - 1.0;
    let scale = TWO_PI / t;
    let root = scale.sqrt();

    let mut r = c(0, z);
    r += c(1, z) * root;
    r += c(2, z) * scale;
    r += c(3, z) * scale * root;
    r += c(4, z) * scale * scale;
    r * alternating_sign(n) * root.sqrt()
}

/// (-1)^(n-1).
#[inline]
fn alternating_sign(n: usize) -> f64 {
    if n % 2 == 1 {
        1.0
    } else {
        -1.0
    }
}
