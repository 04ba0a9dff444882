// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Evaluation strategies for the sampling driver.
//!
//! All three compare exactly the same adjacent pairs and produce the same
//! count; they differ only in memory and compute:
//!
//! | strategy      | memory                   | Z evaluations                    |
//! |---------------|--------------------------|----------------------------------|
//! | `materialize` | NUMSAMPLES doubles       | NUMSAMPLES                       |
//! | `buffered`    | one fixed-size buffer    | NUMSAMPLES + one per chunk edge  |
//! | `recompute`   | none                     | 2·(NUMSAMPLES - 1)               |
//!
//! The default is chosen at compile time:
//!
//! ```bash
//! # Default: recompute
//! cargo build
//!
//! # Buffered by default
//! cargo build --features strategy_buffered
//! ```

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, EnumCountMacro)]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Evaluate every sample into one buffer, then scan it.
    #[strum(to_string = "materialize", serialize = "post")]
    Materialize,

    /// Evaluate chunk by chunk into a bounded buffer, stitching chunk edges
    /// with one extra evaluation each.
    #[strum(to_string = "buffered", serialize = "buffer")]
    Buffered,

    /// Evaluate both ends of every pair independently; no buffer at all.
    #[strum(to_string = "recompute")]
    Recompute,
}

#[cfg(default_strategy_materialize)]
pub const DEFAULT_STRATEGY: Strategy = Strategy::Materialize;

#[cfg(default_strategy_buffered)]
pub const DEFAULT_STRATEGY: Strategy = Strategy::Buffered;

#[cfg(default_strategy_recompute)]
pub const DEFAULT_STRATEGY: Strategy = Strategy::Recompute;

impl Default for Strategy {
    fn default() -> Self {
        DEFAULT_STRATEGY
    }
}
