// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on the strategy feature selection.
//!
//! Exactly one `default_strategy_*` cfg is emitted, so code can write
//! `#[cfg(default_strategy_buffered)]` instead of repeating the feature logic.

fn main() {
    println!("cargo:rustc-check-cfg=cfg(default_strategy_materialize)");
    println!("cargo:rustc-check-cfg=cfg(default_strategy_buffered)");
    println!("cargo:rustc-check-cfg=cfg(default_strategy_recompute)");

    // Materialize wins over the others if several are enabled.
    #[cfg(feature = "strategy_materialize")]
    println!("cargo:rustc-cfg=default_strategy_materialize");

    #[cfg(all(feature = "strategy_buffered", not(feature = "strategy_materialize")))]
    println!("cargo:rustc-cfg=default_strategy_buffered");

    #[cfg(not(any(feature = "strategy_materialize", feature = "strategy_buffered")))]
    println!("cargo:rustc-cfg=default_strategy_recompute");
}
