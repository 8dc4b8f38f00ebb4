//! Multiply-sum kernels.
//!
//! Two implementations of the same contract — given equal-length `f32`
//! slices, return `Σ a[i] * b[i]`:
//!
//! - [`mul_sum_scalar`]: plain loop, single accumulator, the baseline.
//! - [`mul_sum_vector`]: four parallel lanes plus a remainder loop.
//!
//! Lane accumulation reorders the floating-point additions, so the kernels
//! agree within rounding tolerance rather than bitwise (except for inputs
//! shorter than a vector, which never touch the lanes).

pub mod scalar;
pub mod vector;

pub use scalar::mul_sum_scalar;
pub use vector::mul_sum_vector;

use anyhow::{ensure, Result};
use rand::Rng;

/// Number of float lanes processed per vector step.
pub const LANES: usize = 4;

/// Relative tolerance for vector/scalar agreement.
///
/// Loose enough for any realistic input length, tight enough to catch a
/// wrong lane or a skipped remainder.
pub const AGREEMENT_TOLERANCE: f32 = 1e-4;

/// Type of a multiply-sum kernel function.
pub type MulSumFn = fn(&[f32], &[f32]) -> f32;

/// Cross-check the vectorized kernel against the scalar baseline on random
/// inputs of the given length.
///
/// Elements are drawn from [-1, 1) so the partial sums stay
/// well-conditioned. Returns an error naming both results if they disagree
/// beyond [`AGREEMENT_TOLERANCE`] (relative, with a floor of 1.0 on the
/// scale).
pub fn verify(len: usize) -> Result<()> {
    let mut rng = rand::rng();
    let a: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
    let b: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();

    let expected = mul_sum_scalar(&a, &b);
    let got = mul_sum_vector(&a, &b);
    let diff = (got - expected).abs();

    ensure!(
        diff <= AGREEMENT_TOLERANCE * expected.abs().max(1.0),
        "vectorized kernel disagrees with scalar baseline for length {len}: \
         expected {expected}, got {got}, diff {diff}"
    );
    Ok(())
}
