// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Accuracy checks of Z(t) at known zeros.
//!
//! At a zero of ζ on the critical line Z(t) should be 0.0; the size of the
//! residual shows how well the asymptotic formula does at that height. The
//! residual first shrinks as t grows and then stalls once the f64 rounding of
//! theta(t) (of size t·ln t) dominates.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::zeta::{z, zeta_critical};

/// Known zeros from LMFDB, in f64.
///
/// Full-precision strings: 14.1347251417346937904572519835625,
/// 21.0220396387715549926284795938969, 25.0108575801456887632137909925628,
/// 101.3178510057313912287854479402924, 178.3774077760999772858309354141843,
/// 179.9164840202569961393400366120511, 182.207078484366461915407037226988,
/// 1001.3494826377827371221033096531063, 10000.0653454145353147502287213889928,
/// 371870901.8964233245801283081720385309201,
/// 371870902.2813243157291041227177012243450,
/// 371870902.5213243412580878836297930128983.
#[allow(clippy::excessive_precision)]
pub const KNOWN_ZEROS: [f64; 12] = [
    14.1347251417346937904572519835625,
    21.0220396387715549926284795938969,
    25.0108575801456887632137909925628,
    101.3178510057313912287854479402924,
    178.3774077760999772858309354141843,
    179.9164840202569961393400366120511,
    182.207078484366461915407037226988,
    1001.3494826377827371221033096531063,
    10000.0653454145353147502287213889928,
    371870901.8964233245801283081720385309201,
    371870902.2813243157291041227177012243450,
    371870902.5213243412580878836297930128983,
];

/// Heights below which the series reference is usable in f64.
pub const SERIES_LIMIT: f64 = 1000.0;

/// Terms used for the series reference.
const SERIES_TERMS: usize = 100;

/// Residual of Z at one height.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroCheck {
    /// Height as parsed.
    pub t: f64,
    /// Z(t); ideally 0.0.
    pub residual: f64,
    /// |ζ(1/2 + it)| from the series, when `t` is below [`SERIES_LIMIT`].
    pub reference: Option<f64>,
    /// Source text, if the height came from a file.
    pub source: Option<String>,
}

impl ZeroCheck {
    pub fn at(t: f64) -> Self {
        let reference = (t < SERIES_LIMIT).then(|| zeta_critical(t, SERIES_TERMS).norm());
        ZeroCheck {
            t,
            residual: z(t),
            reference,
            source: None,
        }
    }
}

/// Parse one height per line.
///
/// Blank lines and lines starting with `#` are skipped; only the first
/// whitespace-separated field of a line is read.
pub fn read_known_zeros<R: BufRead>(reader: R) -> Result<Vec<(f64, String)>> {
    let mut zeros = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let field = trimmed.split_whitespace().next().unwrap_or(trimmed);
        let t = field.parse::<f64>().map_err(|_| Error::ParseZero {
            line: index + 1,
            text: field.to_string(),
        })?;
        zeros.push((t, trimmed.to_string()));
    }
    Ok(zeros)
}

/// Evaluate Z at every height, keeping the source text.
pub fn check_zeros<I>(zeros: I) -> Vec<ZeroCheck>
where
    I: IntoIterator<Item = (f64, String)>,
{
    zeros
        .into_iter()
        .map(|(t, source)| ZeroCheck {
            source: Some(source),
            ..ZeroCheck::at(t)
        })
        .collect()
}

/// Evaluate Z at the built-in [`KNOWN_ZEROS`].
pub fn check_known_zeros() -> Vec<ZeroCheck> {
    KNOWN_ZEROS.iter().map(|&t| ZeroCheck::at(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_skips_comments_and_blanks() {
        let input = "# LMFDB zeros\n14.134725141734693\n\n  21.022039638771555  extra\n";
        let zeros = read_known_zeros(input.as_bytes()).unwrap();
        assert_eq!(zeros.len(), 2);
        assert_eq!(zeros[0].0, 14.134725141734693);
        assert_eq!(zeros[1].1, "21.022039638771555  extra");
    }

    #[test]
    fn test_read_reports_bad_line() {
        let input = "14.13\nfourteen\n";
        match read_known_zeros(input.as_bytes()) {
            Err(Error::ParseZero { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "fourteen");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_only_below_limit() {
        assert!(ZeroCheck::at(14.134725141734693).reference.is_some());
        assert!(ZeroCheck::at(10000.065345414535).reference.is_none());
    }

    #[test]
    fn test_known_zero_residuals_small() {
        for check in check_known_zeros() {
            // f64 rounding of theta dominates far up the line.
            let tolerance = if check.t > 1.0e6 { 1e-4 } else { 1e-5 };
            assert!(
                check.residual.abs() < tolerance,
                "Z({}) = {}",
                check.t,
                check.residual
            );
        }
    }
}
