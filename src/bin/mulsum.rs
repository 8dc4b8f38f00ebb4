//! Multiply-sum throughput benchmark.
//!
//! Runs the four strategies over two constant-filled arrays and prints one
//! comma-separated summary line to stdout:
//!
//! ```text
//! <array_size>, <vector>, <scalar>, <vector-mt>, <scalar-mt>
//! ```
//!
//! Per-trial raw sums go to stderr. Sizing comes from
//! `BenchConfig::default()`; there are no command-line options.

use std::io;
use std::process;

use mulsum_bench::config::BenchConfig;
use mulsum_bench::harness::Harness;
use mulsum_bench::{init, report};

fn main() {
    let config = BenchConfig::default();

    // The worker pool must exist before anything is allocated or measured;
    // without it the parallel strategies cannot run at all.
    let harness = match Harness::new(config) {
        Ok(harness) => harness,
        Err(err) => {
            eprintln!("No multithreading support: {err:#}");
            process::exit(1);
        }
    };

    let (a, b) = init::constant_arrays(config.array_size);

    let mut stderr = io::stderr().lock();
    let bench = match harness.run(&a, &b, &mut stderr) {
        Ok(bench) => bench,
        Err(err) => {
            eprintln!("benchmark failed: {err:#}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = report::write_summary(&mut stdout, &bench) {
        eprintln!("failed to write summary: {err}");
        process::exit(1);
    }
}
