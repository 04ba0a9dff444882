// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Slow reference evaluation of ζ(1/2 + it).
//!
//! Uses the alternating (Dirichlet eta) series with the binomial tail
//! acceleration:
//!
//! ```text
//! η(s) ≈ Σ_{k=1}^{n} (-1)^(k-1) k^(-s) + 2^(-n) Σ_{k=n+1}^{2n} (-1)^(k-1) e_k k^(-s)
//! e_k  = Σ_{j=k-n}^{n} C(n, j)
//! ζ(s) = η(s) / (1 - 2^(1-s))
//! ```
//!
//! This is only a cross-check for [`z`](super::z): in f64 it is trustworthy
//! for t below about 1000, and `n` must stay below 1024 so that 2^n is finite.

use num_complex::Complex64;

/// Largest accepted number of terms.
pub const MAX_TERMS: usize = 1000;

/// ζ(1/2 + it) with `n` head terms and `n` accelerated tail terms.
///
/// `n` is clamped to [`MAX_TERMS`].
pub fn zeta_critical(t: f64, n: usize) -> Complex64 {
    let n = n.min(MAX_TERMS);
    let s = Complex64::new(0.5, t);
    let one = Complex64::new(1.0, 0.0);

    let term = |k: usize| {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        (-s * (k as f64).ln()).exp() * sign
    };

    let head: Complex64 = (1..=n).map(term).sum();

    // binomials[j] = C(n, j + 1)
    let mut binomials = Vec::with_capacity(n);
    let mut coef = 1.0;
    for j in 0..n {
        coef *= (n - j) as f64;
        coef /= (j + 1) as f64;
        binomials.push(coef);
    }

    let mut remaining: f64 = binomials.iter().sum();
    let mut tail = Complex64::new(0.0, 0.0);
    for (offset, binomial) in binomials.iter().enumerate() {
        tail += term(n + 1 + offset) * remaining;
        remaining -= binomial;
    }

    let eta = head + tail / 2f64.powi(n as i32);
    eta / (one - Complex64::new(2.0, 0.0).powc(one - s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_first_zero() {
        let value = zeta_critical(14.134725141734693, 100);
        assert!(value.norm() < 1e-9, "|zeta| = {}", value.norm());
    }

    #[test]
    fn test_away_from_zero() {
        // |ζ(1/2 + 10i)| ≈ 1.549
        let value = zeta_critical(10.0, 100);
        assert!((value.norm() - 1.549).abs() < 1e-2, "|zeta| = {}", value.norm());
    }

    #[test]
    fn test_more_terms_agree() {
        let a = zeta_critical(50.0, 100);
        let b = zeta_critical(50.0, 400);
        assert!((a - b).norm() < 1e-10);
    }

    #[test]
    fn test_terms_clamped() {
        assert!(zeta_critical(20.0, 5000).norm().is_finite());
    }
}
