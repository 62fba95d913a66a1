//! Cache Trace Simulator CLI.
//!
//! Replays one or more address trace files against a set-associative cache
//! and prints the hit ratio for each.
//!
//! # Usage
//!
//! ```text
//! trace-cache-sim [--config <FILE>] [--max-accesses <N>] [--json] <TRACE>...
//! ```
//!
//! Log verbosity is controlled through the `CACHE_SIM_LOG` environment
//! variable (defaults to `warn`).

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process;

extern crate trace_cache_sim;

use trace_cache_sim::config::Config;
use trace_cache_sim::sim::TraceRunner;
use trace_cache_sim::stats::{self, Summary};

/// Command-line arguments for the cache trace simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Set-Associative Cache Trace Simulator")]
struct Args {
    /// TOML configuration file. Built-in defaults are used if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the per-trace access limit.
    #[arg(long)]
    max_accesses: Option<u64>,

    /// Emit a JSON report instead of text.
    #[arg(long)]
    json: bool,

    /// Trace files of big-endian 32-bit addresses.
    #[arg(required = true)]
    traces: Vec<PathBuf>,
}

/// Main entry point for the cache simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Loads the TOML file (or defaults) and applies CLI
///    overrides. Any configuration error exits with status 2.
/// 2. **Simulation**: Runs every trace concurrently and waits for all of them.
/// 3. **Reporting**: Prints per-trace results and a summary. Exits with
///    status 1 if any trace failed.
fn main() {
    env_logger::init_from_env(Env::default().filter_or("CACHE_SIM_LOG", "warn"));

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: {}", e);
            process::exit(2);
        }),
        None => Config::default(),
    };
    if let Some(max) = args.max_accesses {
        config.trace.max_accesses = max;
    }

    let (geometry, max_accesses) = match config.geometry().and_then(|g| {
        config.max_accesses().map(|max| (g, max))
    }) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("[!] FATAL: {}", e);
            process::exit(2);
        }
    };

    log::info!(
        "geometry: {} lines x {} ways x {} bytes, limit {} accesses",
        geometry.line_count(),
        geometry.ways(),
        geometry.block_bytes(),
        max_accesses
    );

    let runner = TraceRunner::new(geometry, max_accesses);
    let reports = runner.run_all(&args.traces);
    let summary = Summary::from_reports(&reports);

    if args.json {
        match stats::to_json(&geometry, &reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("[!] FATAL: could not serialize report: {}", e);
                process::exit(1);
            }
        }
    } else {
        stats::print_geometry(&geometry);
        for report in &reports {
            stats::print_report(report);
        }
        stats::print_summary(&summary);
    }

    if summary.failed > 0 {
        process::exit(1);
    }
}
