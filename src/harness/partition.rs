//! Index-range partitioning for the parallel strategies.

use std::ops::Range;

/// Split `0..len` into exactly `workers` contiguous half-open ranges.
///
/// Every element is covered: when `len` is not a multiple of `workers`, the
/// first `len % workers` ranges take one extra element. Ranges may be empty
/// when there are more workers than elements.
///
/// # Panics
/// Panics if `workers` is zero. Callers validate the worker count once via
/// [`BenchConfig::validate`](crate::config::BenchConfig::validate).
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0, "worker count must be at least 1");

    let base = len / workers;
    let extra = len % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for k in 0..workers {
        let size = base + usize::from(k < extra);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}
