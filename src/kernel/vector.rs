//! 4-lane vectorized kernel.
//!
//! Processes the inputs in groups of four: lane `k` accumulates the products
//! at indices `k`, `k + 4`, `k + 8`, … and the trailing elements (when the
//! length is not a multiple of four) fold into lane 0. The lane grouping
//! reorders the floating-point additions relative to the scalar kernel, so
//! the two agree within rounding rather than bit-for-bit.
//!
//! Dispatch is decided at compile time: SSE2 on x86_64, NEON on aarch64, and
//! an unrolled four-accumulator loop everywhere else.

use super::LANES;

/// Compute the sum of element-wise products four lanes at a time.
///
/// Inputs shorter than [`LANES`] never enter the vector body; the remainder
/// loop reproduces the scalar summation order exactly for those lengths.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn mul_sum_vector(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Input slices must have the same length");

    #[cfg(target_arch = "x86_64")]
    {
        mul_sum_sse2(a, b)
    }

    #[cfg(target_arch = "aarch64")]
    {
        mul_sum_neon(a, b)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        mul_sum_unrolled(a, b)
    }
}

/// Fold the trailing elements into lane 0, then collapse the lanes.
fn finish(mut lanes: [f32; LANES], a: &[f32], b: &[f32], tail: usize) -> f32 {
    for i in tail..a.len() {
        lanes[0] += a[i] * b[i];
    }

    lanes[0] + lanes[1] + lanes[2] + lanes[3]
}

/// SSE2 is part of the x86_64 baseline, so this path needs no runtime
/// feature detection.
#[cfg(target_arch = "x86_64")]
fn mul_sum_sse2(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::x86_64::*;

    let limit = (a.len() / LANES) * LANES;
    let mut lanes = [0.0f32; LANES];

    unsafe {
        let mut acc = _mm_setzero_ps();

        for i in (0..limit).step_by(LANES) {
            let va = _mm_loadu_ps(a.as_ptr().add(i));
            let vb = _mm_loadu_ps(b.as_ptr().add(i));
            acc = _mm_add_ps(acc, _mm_mul_ps(va, vb));
        }

        _mm_storeu_ps(lanes.as_mut_ptr(), acc);
    }

    finish(lanes, a, b, limit)
}

#[cfg(target_arch = "aarch64")]
fn mul_sum_neon(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::aarch64::*;

    let limit = (a.len() / LANES) * LANES;
    let mut lanes = [0.0f32; LANES];

    unsafe {
        let mut acc = vdupq_n_f32(0.0);

        for i in (0..limit).step_by(LANES) {
            let va = vld1q_f32(a.as_ptr().add(i));
            let vb = vld1q_f32(b.as_ptr().add(i));
            acc = vfmaq_f32(acc, va, vb);
        }

        vst1q_f32(lanes.as_mut_ptr(), acc);
    }

    finish(lanes, a, b, limit)
}

/// Portable fallback: four scalar accumulators stand in for the vector
/// lanes, preserving the same summation order.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn mul_sum_unrolled(a: &[f32], b: &[f32]) -> f32 {
    let limit = (a.len() / LANES) * LANES;
    let mut lanes = [0.0f32; LANES];

    for i in (0..limit).step_by(LANES) {
        lanes[0] += a[i] * b[i];
        lanes[1] += a[i + 1] * b[i + 1];
        lanes[2] += a[i + 2] * b[i + 2];
        lanes[3] += a[i + 3] * b[i + 3];
    }

    finish(lanes, a, b, limit)
}
