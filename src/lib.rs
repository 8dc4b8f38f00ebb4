//! # Mulsum-Bench
//!
//! Throughput benchmark for the multiply-sum reduction `Σ a[i] * b[i]`,
//! comparing four execution strategies: a scalar loop, a 4-lane vectorized
//! loop, and multithreaded versions of both. Each strategy is timed over a
//! configurable number of trials and the best observed rate (millions of
//! multiply-adds per second) is reported.

pub mod config;
pub mod harness;
pub mod init;
pub mod kernel;
pub mod report;
pub mod utils;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::harness::{BenchReport, Harness, Strategy, Trial};
    pub use crate::kernel::{mul_sum_scalar, mul_sum_vector};
}

#[cfg(test)]
mod tests {
    use crate::config::BenchConfig;
    use crate::harness::{Harness, Strategy};
    use crate::{init, report};

    #[test]
    fn end_to_end_run_produces_contractual_output() {
        let config = BenchConfig {
            array_size: 100,
            threads: 4,
            trials: 3,
        };
        let harness = Harness::new(config).unwrap();
        let (a, b) = init::constant_arrays(config.array_size);

        let mut diag = Vec::new();
        let bench = harness.run(&a, &b, &mut diag).unwrap();

        // One diagnostic line of four sums per trial.
        let diag = String::from_utf8(diag).unwrap();
        assert_eq!(diag.lines().count(), 3);
        for line in diag.lines() {
            assert_eq!(line.split(", ").count(), 4);
        }

        // One summary line: array size plus four best rates.
        let mut out = Vec::new();
        report::write_summary(&mut out, &bench).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("100, "));
        assert!(out.ends_with('\n'));
        assert_eq!(out.trim_end().split(", ").count(), 5);

        for strategy in Strategy::ALL {
            let best = bench.best(strategy);
            assert!(best > 0.0, "{} best must be positive", strategy.name());
            assert!(best.is_finite(), "{} best must be finite", strategy.name());
        }
    }
}
