// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Z-Evaluator: the Riemann-Siegel Z function and its ingredients.
//!
//! ## Module Structure
//!
//! - `constants`: π-related constants and the theta series coefficients
//! - `theta`: Riemann-Siegel theta and the analytic zero-count estimate
//! - `coefficients`: the C₀..C₄ remainder polynomials
//! - `riemann_siegel`: Z(t) itself
//! - `series`: slow reference evaluation of ζ(1/2 + it), for validation

pub mod coefficients;
pub mod constants;
pub mod riemann_siegel;
pub mod series;
pub mod theta;

pub use coefficients::{c, Coefficient};
pub use riemann_siegel::z;
pub use series::zeta_critical;
pub use theta::{estimate_zero_count, theta};
