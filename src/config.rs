//! Benchmark configuration.
//!
//! The sizing constants are grouped into an explicit struct handed to the
//! harness at start-up, so tests can parameterize runs without
//! recompilation. The vector width is not configurable; it lives in
//! [`kernel::LANES`](crate::kernel::LANES).

use anyhow::{ensure, Result};

/// Sizing parameters for one benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of elements in each input array (default: 100).
    pub array_size: usize,
    /// Number of workers used by the parallel strategies (default: 4).
    pub threads: usize,
    /// Measurement trials per strategy; the best throughput wins
    /// (default: 1).
    pub trials: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            array_size: 100,
            threads: 4,
            trials: 1,
        }
    }
}

impl BenchConfig {
    /// Check the parameters once, up front; the harness and the worker
    /// partitioning never re-validate them.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.threads > 0, "thread count must be at least 1");
        ensure!(self.trials > 0, "trial count must be at least 1");
        Ok(())
    }
}
