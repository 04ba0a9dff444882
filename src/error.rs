// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sampling and validation.

use thiserror::Error;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary, before any Z evaluation happens.
///
/// The Z-Evaluator itself never fails: out-of-domain heights give NaN.
#[derive(Debug, Error)]
pub enum Error {
    #[error("empty or invalid range: lower {lower} must be finite and below upper {upper}")]
    EmptyRange { lower: f64, upper: f64 },

    #[error("invalid sampling density {0}: must be finite and positive")]
    InvalidDensity(f64),

    #[error("non-positive height {0}: Z(t) is only defined for t > 0")]
    NonPositiveHeight(f64),

    #[error("{0} samples overflow a 64-bit sample index")]
    SampleCountOverflow(f64),

    #[error("{samples} samples exceed the addressable limit of {limit}")]
    TooManySamples { samples: u64, limit: u64 },

    #[error("buffer length must be at least 1")]
    EmptyBuffer,

    #[error("line {line}: cannot parse {text:?} as a height")]
    ParseZero { line: usize, text: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
