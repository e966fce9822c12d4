//! Small numeric and comparison helpers used next to extracted values

/// Round `value` to `precision` fractional digits.
///
/// Renders with exactly `precision` digits and reads the text back, so the
/// result is the float closest to the printed decimal.
pub fn round_to(value: f64, precision: usize) -> f64 {
    format!("{:.*}", precision, value)
        .parse()
        .unwrap_or(value)
}

/// True only when both strings are present and equal.
pub fn eq_present(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(-1.005, 1), -1.0);
        assert_eq!(round_to(10.0, 3), 10.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_eq_present() {
        assert!(eq_present(Some("a"), Some("a")));
        assert!(!eq_present(Some("a"), Some("b")));
        assert!(!eq_present(None, Some("a")));
        assert!(!eq_present(None, None));
    }
}
