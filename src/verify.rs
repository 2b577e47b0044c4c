//! Post-hoc checks of sorted output, used by tests and the benchmark driver.

use std::cmp::Ordering;

use thiserror::Error;

/// An adjacent pair where the later element compares less than the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("ordering violation at index {index}: {previous} followed by {next}")]
pub struct OrderingViolation {
    /// Index of the later element of the pair.
    pub index: usize,
    pub previous: f32,
    pub next: f32,
}

fn find_violation(values: &[f32], less: impl Fn(f32, f32) -> bool) -> Result<(), OrderingViolation> {
    match values.windows(2).position(|w| less(w[1], w[0])) {
        Some(i) => Err(OrderingViolation {
            index: i + 1,
            previous: values[i],
            next: values[i + 1],
        }),
        None => Ok(()),
    }
}

/// Check that `values` is non-decreasing using the IEEE `<` comparison.
///
/// NaNs compare false against everything and are never reported.
pub fn check_sorted(values: &[f32]) -> Result<(), OrderingViolation> {
    find_violation(values, |a, b| a < b)
}

/// Check that `values` is non-decreasing according to [`f32::total_cmp`].
pub fn check_total_order(values: &[f32]) -> Result<(), OrderingViolation> {
    find_violation(values, |a, b| a.total_cmp(&b) == Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sorted() {
        assert!(check_sorted(&[]).is_ok());
        assert!(check_sorted(&[1.0]).is_ok());
        assert!(check_sorted(&[-1.0, 0.0, 0.0, 2.5]).is_ok());
        assert!(check_sorted(&[0.0, -0.0]).is_ok());
        assert_eq!(
            check_sorted(&[1.0, 2.0, 1.5, 3.0]),
            Err(OrderingViolation {
                index: 2,
                previous: 2.0,
                next: 1.5
            })
        );
    }

    #[test]
    fn test_check_total_order() {
        assert!(check_total_order(&[-0.0, 0.0, f32::INFINITY, f32::NAN]).is_ok());
        let err = check_total_order(&[0.0, -0.0]).unwrap_err();
        assert_eq!(err.index, 1);
        assert!(check_total_order(&[f32::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_violation_message() {
        let err = check_sorted(&[3.0, 1.0]).unwrap_err();
        assert_eq!(err.to_string(), "ordering violation at index 1: 3 followed by 1");
    }
}
