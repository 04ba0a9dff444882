// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count zeros of ζ on the critical line between two heights.
//!
//! Usage: `rszeros LOWER UPPER SAMP [--strategy S] [--buffer-len N] [--threads N]`
//!
//! ```text
//! $ rszeros 10 10000 10
//! I estimate I will find 10141.965 zeros
//! I found 10142 Zeros in 0.376 seconds
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::error;

use riemann_siegel::sampling::{Strategy, Z_BUFFER_LENGTH};
use riemann_siegel::validate::{check_known_zeros, check_zeros, read_known_zeros, ZeroCheck};
use riemann_siegel::{estimate_zero_count, init_logging, Result, SampleGrid, ZeroCounter};

#[derive(Parser, Debug)]
#[command(name = "rszeros")]
#[command(about = "Count sign changes of the Riemann-Siegel Z function on [LOWER, UPPER]")]
struct Args {
    /// Start of the scanned interval (height t)
    #[arg(allow_negative_numbers = true)]
    lower: f64,

    /// End of the scanned interval
    #[arg(allow_negative_numbers = true)]
    upper: f64,

    /// Samples per unit of t
    #[arg(allow_negative_numbers = true)]
    samp: f64,

    /// Evaluation strategy: materialize (post), buffered (buffer) or recompute
    #[arg(long, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Chunk size, in samples, for the buffered strategy
    #[arg(long, default_value_t = Z_BUFFER_LENGTH)]
    buffer_len: usize,

    /// Worker threads (default: available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    /// Print Z(t) for each height in FILE (one per line) before counting
    #[arg(long, value_name = "FILE")]
    check_zeros: Option<PathBuf>,

    /// Print Z(t) and |zeta| at the built-in known zeros before counting
    #[arg(long)]
    self_test: bool,
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.self_test {
        print_checks(&check_known_zeros());
    }
    if let Some(path) = &args.check_zeros {
        let zeros = read_known_zeros(BufReader::new(File::open(path)?))?;
        print_checks(&check_zeros(zeros));
    }

    let grid = SampleGrid::new(args.lower, args.upper, args.samp)?;
    println!(
        "I estimate I will find {:.3} zeros",
        estimate_zero_count(args.upper)
    );

    let counter = ZeroCounter::new(args.strategy).with_buffer_len(args.buffer_len);
    let start = Instant::now();
    let report = match args.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| counter.count(&grid))?,
        None => counter.count(&grid)?,
    };

    println!(
        "I found {} Zeros in {:.3} seconds",
        report.zeros,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_checks(checks: &[ZeroCheck]) {
    for check in checks {
        let reference = check
            .reference
            .map(|value| format!("{:.3e}", value))
            .unwrap_or_else(|| "-".to_string());
        println!(
            " {:30.20} {:30.20} {:>12}   {}",
            check.t,
            check.residual,
            reference,
            check.source.as_deref().unwrap_or("")
        );
    }
}
