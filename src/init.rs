//! Input array initialization.
//!
//! The benchmark always multiplies the same two constant-filled arrays; the
//! variable under measurement is the execution strategy, not the data.

/// Fill value for the first input array.
pub const FILL_A: f32 = 1.0;

/// Fill value for the second input array.
pub const FILL_B: f32 = 2.0;

/// Allocate the two input arrays, filled with [`FILL_A`] and [`FILL_B`].
///
/// Allocation failure aborts the process with the standard library's
/// out-of-memory diagnostic.
pub fn constant_arrays(len: usize) -> (Vec<f32>, Vec<f32>) {
    (vec![FILL_A; len], vec![FILL_B; len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_have_requested_length_and_fill() {
        let (a, b) = constant_arrays(100);
        assert_eq!(a.len(), 100);
        assert_eq!(b.len(), 100);
        assert!(a.iter().all(|&x| x == FILL_A));
        assert!(b.iter().all(|&x| x == FILL_B));
    }

    #[test]
    fn zero_length_arrays_are_empty() {
        let (a, b) = constant_arrays(0);
        assert!(a.is_empty());
        assert!(b.is_empty());
    }
}
