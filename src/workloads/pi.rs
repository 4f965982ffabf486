//! Leibniz series for Pi.
//!
//! The series converges as O(1/k); it is used for its loop shape, not its accuracy.

/// `4 * sum_{j<terms} (-1)^j / (2j + 1)`.
pub fn leibniz_partial_sum(terms: usize) -> f64 {
    let mut pi = 0.0f64;
    for k in 0..terms {
        let sign = (-1.0f64).powi((k % 2) as i32);
        pi += (sign / (2 * k + 1) as f64) * 4.0;
    }
    pi
}

/// Fractional digits needed to print any `f64` exactly.
const MAX_EXACT_DIGITS: usize = 1074;

/// Partial sum over `terms` terms, rendered with `terms` fixed decimal digits.
///
/// The formatter caps precision at `u16::MAX`, so digits beyond the exact
/// expansion of the value are appended as zeros.
pub fn calculate_pi(terms: usize) -> String {
    let exact = terms.min(MAX_EXACT_DIGITS);
    let mut out = format!("{:.*}", exact, leibniz_partial_sum(terms));
    out.extend(std::iter::repeat('0').take(terms - exact));
    out
}
