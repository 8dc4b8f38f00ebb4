//! Timing/threading harness.
//!
//! Drives repeated measurement trials over the four execution strategies and
//! keeps the best observed throughput per strategy. The parallel strategies
//! fan out over a fixed-size rayon pool, one worker per precomputed index
//! range, and combine partial sums with a commutative reduction.

pub mod partition;

use std::io::Write;
use std::ops::Range;

use anyhow::{ensure, Context, Result};
use rayon::prelude::*;

use crate::config::BenchConfig;
use crate::kernel::{mul_sum_scalar, mul_sum_vector, MulSumFn};
use crate::report;
use crate::utils::{mega_mults_per_sec, time, CpuPinGuard};
use partition::partition;

/// One of the four measured execution modes, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One vectorized kernel call over the full arrays.
    Vector,
    /// One scalar kernel call over the full arrays.
    Scalar,
    /// Vectorized kernel, one worker per array slice.
    VectorThreaded,
    /// Scalar kernel, one worker per array slice.
    ScalarThreaded,
}

impl Strategy {
    /// Number of strategies.
    pub const COUNT: usize = 4;

    /// All strategies, in the order they are measured and reported.
    pub const ALL: [Strategy; Strategy::COUNT] = [
        Strategy::Vector,
        Strategy::Scalar,
        Strategy::VectorThreaded,
        Strategy::ScalarThreaded,
    ];

    /// Short name used in diagnostics and test output.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Vector => "vector",
            Strategy::Scalar => "scalar",
            Strategy::VectorThreaded => "vector-mt",
            Strategy::ScalarThreaded => "scalar-mt",
        }
    }

    fn kernel(self) -> MulSumFn {
        match self {
            Strategy::Vector | Strategy::VectorThreaded => mul_sum_vector,
            Strategy::Scalar | Strategy::ScalarThreaded => mul_sum_scalar,
        }
    }

    fn threaded(self) -> bool {
        matches!(self, Strategy::VectorThreaded | Strategy::ScalarThreaded)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Raw sums and throughputs observed in one trial, indexed by strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trial {
    /// Computed multiply-sum per strategy, in [`Strategy::ALL`] order.
    pub sums: [f32; Strategy::COUNT],
    /// Throughput per strategy in millions of multiply-adds per second.
    pub rates: [f64; Strategy::COUNT],
}

impl Trial {
    /// The computed multiply-sum for the given strategy.
    pub fn sum(&self, strategy: Strategy) -> f32 {
        self.sums[strategy.index()]
    }

    /// Throughput for the given strategy, in millions of multiply-adds per
    /// second.
    pub fn throughput(&self, strategy: Strategy) -> f64 {
        self.rates[strategy.index()]
    }
}

/// Results of a complete benchmark run.
#[derive(Clone, Debug)]
pub struct BenchReport {
    /// Number of elements in each input array.
    pub array_size: usize,
    /// Best observed throughput per strategy, in [`Strategy::ALL`] order.
    pub best: [f64; Strategy::COUNT],
    /// Per-trial measurements, in execution order.
    pub trials: Vec<Trial>,
}

impl BenchReport {
    /// Best observed throughput for the strategy, in millions of
    /// multiply-adds per second.
    pub fn best(&self, strategy: Strategy) -> f64 {
        self.best[strategy.index()]
    }
}

/// Benchmark driver owning the validated configuration and the worker pool.
pub struct Harness {
    config: BenchConfig,
    pool: rayon::ThreadPool,
}

impl Harness {
    /// Validate the configuration and build the fixed-size worker pool.
    ///
    /// Pool construction happens before any array is allocated or any
    /// measurement taken; failure here is the fatal "no multithreading
    /// support" case and the caller is expected to exit non-zero.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .context("failed to build worker thread pool")?;
        Ok(Self { config, pool })
    }

    /// The configuration this harness was built with.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run all trials over the given arrays, writing one diagnostic line of
    /// raw sums per trial to `diag`.
    pub fn run(&self, a: &[f32], b: &[f32], diag: &mut dyn Write) -> Result<BenchReport> {
        ensure!(
            a.len() == b.len(),
            "input arrays must have equal length ({} vs {})",
            a.len(),
            b.len()
        );

        // One partition serves every parallel trial; bounds are checked
        // here once rather than per worker.
        let ranges = partition(a.len(), self.config.threads);

        let mut best = [0.0f64; Strategy::COUNT];
        let mut trials = Vec::with_capacity(self.config.trials);

        for _ in 0..self.config.trials {
            let mut trial = Trial::default();

            for strategy in Strategy::ALL {
                // Serial measurements pin to the current core; the parallel
                // ones must stay free to spread across the machine.
                let pin = (!strategy.threaded()).then(CpuPinGuard::new);
                let (elapsed, sum) = time(|| self.mul_sum(strategy, a, b, &ranges));
                drop(pin);

                let rate = mega_mults_per_sec(a.len(), elapsed);
                trial.sums[strategy.index()] = sum;
                trial.rates[strategy.index()] = rate;
                if rate > best[strategy.index()] {
                    best[strategy.index()] = rate;
                }
            }

            writeln!(diag, "{}", report::trial_line(&trial))
                .context("failed to write trial diagnostics")?;
            trials.push(trial);
        }

        Ok(BenchReport {
            array_size: a.len(),
            best,
            trials,
        })
    }

    /// Execute one strategy over the full arrays and return its sum.
    fn mul_sum(&self, strategy: Strategy, a: &[f32], b: &[f32], ranges: &[Range<usize>]) -> f32 {
        let kernel = strategy.kernel();
        if strategy.threaded() {
            // Combination order across workers is unspecified; addition is
            // commutative, so the total is stable up to rounding.
            self.pool.install(|| {
                ranges
                    .par_iter()
                    .map(|r| kernel(&a[r.start..r.end], &b[r.start..r.end]))
                    .sum::<f32>()
            })
        } else {
            kernel(a, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init;
    use float_eq::assert_float_eq;

    fn run(config: BenchConfig, a: &[f32], b: &[f32]) -> (BenchReport, String) {
        let harness = Harness::new(config).unwrap();
        let mut diag = Vec::new();
        let report = harness.run(a, b, &mut diag).unwrap();
        (report, String::from_utf8(diag).unwrap())
    }

    #[test]
    fn constant_fill_sums_for_every_strategy() {
        let config = BenchConfig::default();
        let (a, b) = init::constant_arrays(config.array_size);
        let (report, _) = run(config, &a, &b);

        let trial = report.trials[0];
        for strategy in Strategy::ALL {
            assert_float_eq!(trial.sum(strategy), 200.0, abs <= 1e-3);
        }
    }

    #[test]
    fn parallel_strategies_cover_every_element() {
        // 10 elements over 4 workers splits unevenly; the trailing elements
        // must still be counted.
        let config = BenchConfig {
            array_size: 10,
            threads: 4,
            trials: 1,
        };
        let (a, b) = init::constant_arrays(config.array_size);
        let (report, _) = run(config, &a, &b);

        let trial = report.trials[0];
        assert_float_eq!(trial.sum(Strategy::VectorThreaded), 20.0, abs <= 1e-4);
        assert_float_eq!(trial.sum(Strategy::ScalarThreaded), 20.0, abs <= 1e-4);
    }

    #[test]
    fn best_is_max_over_trials() {
        let config = BenchConfig {
            array_size: 1024,
            threads: 2,
            trials: 5,
        };
        let (a, b) = init::constant_arrays(config.array_size);
        let (report, _) = run(config, &a, &b);

        assert_eq!(report.trials.len(), 5);
        for strategy in Strategy::ALL {
            let max = report
                .trials
                .iter()
                .map(|t| t.throughput(strategy))
                .fold(0.0f64, f64::max);
            assert_eq!(report.best(strategy), max, "{}", strategy.name());
            for trial in &report.trials {
                assert!(report.best(strategy) >= trial.throughput(strategy));
            }
        }
    }

    #[test]
    fn throughputs_positive_and_finite() {
        let config = BenchConfig::default();
        let (a, b) = init::constant_arrays(config.array_size);
        let (report, _) = run(config, &a, &b);

        for strategy in Strategy::ALL {
            let best = report.best(strategy);
            assert!(best.is_finite(), "{}", strategy.name());
            assert!(best > 0.0, "{}", strategy.name());
        }
    }

    #[test]
    fn one_diagnostic_line_per_trial() {
        let config = BenchConfig {
            array_size: 64,
            threads: 4,
            trials: 3,
        };
        let (a, b) = init::constant_arrays(config.array_size);
        let (_, diag) = run(config, &a, &b);

        assert_eq!(diag.lines().count(), 3);
        for line in diag.lines() {
            assert_eq!(line.split(", ").count(), Strategy::COUNT);
        }
    }

    #[test]
    fn mismatched_input_lengths_rejected() {
        let harness = Harness::new(BenchConfig::default()).unwrap();
        let mut diag = Vec::new();
        assert!(harness.run(&[1.0], &[1.0, 2.0], &mut diag).is_err());
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = BenchConfig {
            threads: 0,
            ..Default::default()
        };
        assert!(Harness::new(config).is_err());
    }

    #[test]
    fn strategy_order_matches_report_contract() {
        let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["vector", "scalar", "vector-mt", "scalar-mt"]);
    }
}
