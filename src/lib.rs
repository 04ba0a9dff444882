// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting zeros of the Riemann zeta function on the critical line.
//!
//! Zeros of ζ(1/2 + it) are the zeros of the real Riemann-Siegel function
//! Z(t). Rather than locating them, we sample Z on an evenly spaced grid and
//! count sign changes: every strict sign change between neighbouring samples
//! means at least one zero lies between them.
//!
//! # Architecture
//!
//! ## Z-Evaluator ([`zeta`])
//!
//! A pure, re-entrant `f64 -> f64` function built from:
//! - theta(t), the Riemann-Siegel theta function, by its asymptotic series
//! - the main sum over ⌊sqrt(t/2π)⌋ terms
//! - the remainder term from the fitted polynomials C₀..C₄
//!
//! ## Sampling Driver ([`sampling`])
//!
//! Splits the sample indices across rayon workers and reduces the per-worker
//! counts. Three strategies trade memory against evaluations; all compare the
//! same adjacent pairs, including the pairs spanning chunk boundaries.
//!
//! # Accuracy
//!
//! The count is a lower bound on the number of zeros in the range: two zeros
//! closer together than one sample step cancel out, and a zero that lands
//! exactly on a sample is not seen. Coarse sampling at large heights therefore
//! undercounts; the fix is a larger sampling density, not a different count.
//!
//! # References
//!
//! - Pugh, G. R. (1992). "The Riemann-Siegel formula and large scale computations
//!   of the Riemann zeta function." M.Sc. thesis, University of British Columbia.
//!   <https://web.viu.ca/pughg/thesis.d/masters.thesis.pdf>

pub mod error;
pub mod sampling;
pub mod validate;
pub mod zeta;

// Re-export commonly used types
pub use error::{Error, Result};
pub use sampling::{count_zeros, CountReport, SampleGrid, Strategy, ZeroCounter};
pub use zeta::{estimate_zero_count, theta, z};

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to stderr.
///
/// Use the `RUST_LOG` environment variable to override the default filter,
/// which is `info` for this crate and `warn` for others.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,riemann_siegel=info,rszeros=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
