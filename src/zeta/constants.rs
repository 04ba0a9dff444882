// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numeric constants for the Riemann-Siegel formula.

pub use std::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// 1/(2π).
pub const INV_TWO_PI: f64 = 1.0 / TWO_PI;

/// π/8, the constant phase term of theta.
pub const PI_OVER_8: f64 = PI * 0.125;

/// Coefficients c₁..c₅ of the asymptotic series of theta in powers of 1/t.
///
/// theta(t) = (t/2)(ln(t/2π) - 1) - π/8 + c₁/t + c₂/t³ + c₃/t⁵ + c₄/t⁷ + c₅/t⁹ + ...
///
/// Numerators are OEIS A282898, denominators OEIS A114721.
pub const THETA_SERIES: [f64; 5] = [
    1.0 / 48.0,
    7.0 / 5760.0,
    31.0 / 80640.0,
    127.0 / 430080.0,
    511.0 / 1216512.0,
];
