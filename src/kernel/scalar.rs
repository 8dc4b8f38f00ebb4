//! Scalar reference kernel.
//!
//! A plain loop with a single running accumulator, serving as the
//! correctness baseline for the vectorized kernel.

/// Compute the sum of element-wise products with a single accumulator.
///
/// # Arguments
/// * `a` - First input slice
/// * `b` - Second input slice
///
/// # Panics
/// Panics if the slices have different lengths.
///
/// # Example
/// ```
/// use mulsum_bench::kernel::mul_sum_scalar;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let result = mul_sum_scalar(&a, &b);
/// assert!((result - 32.0).abs() < 1e-6);
/// ```
pub fn mul_sum_scalar(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Input slices must have the same length");

    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
