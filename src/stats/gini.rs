//! Gini coefficient of a voting-power distribution.
//!
//! Uses the closed-form rank summation for the discrete Gini
//! coefficient of a finite population:
//!
//! ```text
//! G = sum_{i=1..n} v_i * (2i - n - 1) / (n * sum_{i=1..n} v_i)
//! ```
//!
//! with `v` sorted ascending. Exact for finite, non-negative inputs.

/// Compute the Gini coefficient of a set of voting powers
///
/// **Public** - main entry point for the per-height calculation
///
/// # Arguments
/// * `values` - voting powers, in any order, non-negative. The
///   non-negativity precondition is documented, not enforced.
///
/// # Returns
/// A value in [0, 1]: 0 for perfect equality, approaching 1 as one
/// validator dominates. An empty slice or an all-zero slice divides by
/// zero and yields NaN; callers surface that value rather than mask it.
pub fn gini_coefficient(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len() as f64;
    let sum: f64 = sorted.iter().sum();

    let numerator: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, value)| value * (2.0 * (i as f64 + 1.0) - n - 1.0))
        .sum();
    let denominator = n * sum;

    numerator / denominator
}

/// Arithmetic mean of a set of coefficients
///
/// Empty input yields NaN, the same degeneracy policy as
/// [`gini_coefficient`].
pub fn mean(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_equal_powers_give_zero() {
        assert_close(gini_coefficient(&[7.0, 7.0, 7.0, 7.0]), 0.0);
        assert_close(gini_coefficient(&[1.0]), 0.0);
    }

    #[test]
    fn test_known_distribution() {
        assert_close(gini_coefficient(&[1.0, 2.0, 3.0, 4.0]), 0.25);
    }

    #[test]
    fn test_single_dominant_power() {
        // One validator holds everything: G = (n - 1) / n
        let mut powers = vec![0.0; 9];
        powers.push(1.0);

        assert_close(gini_coefficient(&powers), 0.9);
    }

    #[test]
    fn test_permutation_invariance() {
        let ordered = gini_coefficient(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let shuffled = gini_coefficient(&[4.0, 1.0, 5.0, 3.0, 2.0]);

        assert_close(shuffled, ordered);
    }

    #[test]
    fn test_scale_invariance() {
        let base = gini_coefficient(&[1.0, 2.0, 3.0, 4.0]);
        let scaled = gini_coefficient(&[1000.0, 2000.0, 3000.0, 4000.0]);

        assert_close(scaled, base);
    }

    #[test]
    fn test_empty_input_is_nan() {
        assert!(gini_coefficient(&[]).is_nan());
    }

    #[test]
    fn test_all_zero_powers_are_nan() {
        assert!(gini_coefficient(&[0.0, 0.0, 0.0]).is_nan());
    }

    #[test]
    fn test_mean() {
        assert_close(mean(&[0.0, 0.25]), 0.125);
        assert_close(mean(&[0.5]), 0.5);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }
}
