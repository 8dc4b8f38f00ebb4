//! Wall-clock measurement helpers.
//!
//! The reported metric is defined in operations per second, so measurement
//! uses the wall clock rather than a cycle counter.

use std::time::{Duration, Instant};

/// Time a single closure invocation.
#[inline]
pub fn time<R>(f: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = f();
    (start.elapsed(), result)
}

/// Convert an element count and elapsed time into millions of multiply-adds
/// per second.
///
/// Elapsed time is floored at one nanosecond: a workload this small can
/// finish below the clock's resolution, and the reported rate must stay
/// finite.
pub fn mega_mults_per_sec(ops: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.max(Duration::from_nanos(1)).as_secs_f64();
    ops as f64 / secs / 1_000_000.0
}
