//! Numerically-stable reductions shared across the hierbench crates.
//!
//! Means over a hierarchical experiment can span thousands of terms, so the
//! arithmetic mean is built on Neumaier compensated summation rather than a
//! naive left-to-right fold. The result is order-independent to within one
//! rounding of the exact sum.

/// Neumaier compensated summation.
///
/// An improved variant of Kahan summation that also handles the case where
/// the addend is larger in magnitude than the running sum. Error is O(ε)
/// independent of the number of terms.
///
/// # Examples
///
/// ```rust
/// use hierbench_core::math::neumaier_sum;
///
/// // Naive summation loses the small terms entirely here.
/// let sum = neumaier_sum(&[1e100, 1.0, -1e100, 1.0]);
/// assert_eq!(sum, 2.0);
/// ```
pub fn neumaier_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

/// Arithmetic mean using compensated summation.
///
/// Returns NaN for an empty slice; callers that need a typed failure check
/// emptiness first.
pub fn mean(values: &[f64]) -> f64 {
    neumaier_sum(values) / values.len() as f64
}

/// Geometric mean: the n-th root of the product of the values.
///
/// Only meaningful for positive inputs (a zero collapses the product, a
/// negative value can make the root undefined).
pub fn geometric_mean(values: &[f64]) -> f64 {
    let product: f64 = values.iter().product();
    product.powf(1.0 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_neumaier_sum_matches_naive_on_small_input() {
        let data = [3.0, 4.0, 4.0, 1.0, 2.0];
        assert_eq!(neumaier_sum(&data), 14.0);
    }

    #[test]
    fn test_neumaier_sum_recovers_cancelled_terms() {
        assert_eq!(neumaier_sum(&[1e100, 1.0, -1e100, 1.0]), 2.0);
        assert_eq!(neumaier_sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
    }

    #[test]
    fn test_neumaier_sum_empty() {
        assert_eq!(neumaier_sum(&[]), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[0.0, 2.0]), 1.0);
        assert_eq!(mean(&[3.0]), 3.0);
        let x = [3.0, 4.0, 4.0, 1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 3.0];
        assert_relative_eq!(mean(&x), 2.9, max_relative = 1e-12);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_geometric_mean() {
        assert_eq!(geometric_mean(&[10.0, 0.1]), 1.0);
        assert_relative_eq!(geometric_mean(&[2.0, 8.0]), 4.0, max_relative = 1e-12);
        assert_relative_eq!(
            geometric_mean(&[1.0, 2.0, 4.0]),
            2.0,
            max_relative = 1e-12
        );
    }

    proptest! {
        #[test]
        fn prop_mean_is_order_insensitive(mut data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let forward = mean(&data);
            data.reverse();
            let backward = mean(&data);
            // Compensated summation keeps the two orderings within a few ulps
            // even with heavy cancellation.
            prop_assert!((forward - backward).abs() <= 1e-9 * forward.abs().max(1.0));
        }

        #[test]
        fn prop_mean_within_bounds(data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let m = mean(&data);
            let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
        }
    }
}
