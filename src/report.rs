//! Result reporting.
//!
//! The summary line on stdout is the program's only machine-readable
//! output; per-trial raw sums go to the diagnostic stream so scripts
//! consuming stdout never see them.

use std::io::{self, Write};

use crate::harness::{BenchReport, Strategy, Trial};

/// Format one trial's raw sums: four comma-separated values with two
/// decimals, in strategy report order.
pub fn trial_line(trial: &Trial) -> String {
    let fields: Vec<String> = Strategy::ALL
        .iter()
        .map(|&strategy| format!("{:.2}", trial.sum(strategy)))
        .collect();
    fields.join(", ")
}

/// Write the single summary line: array size followed by the best observed
/// throughput per strategy, two decimals each.
pub fn write_summary(w: &mut dyn Write, report: &BenchReport) -> io::Result<()> {
    write!(w, "{}", report.array_size)?;
    for strategy in Strategy::ALL {
        write!(w, ", {:.2}", report.best(strategy))?;
    }
    writeln!(w)
}
