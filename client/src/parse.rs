//! Comma-separated numeric input parsing.

/// Parse a comma-separated list of numbers into finite integers.
///
/// Tokens are trimmed; empty and unparseable tokens are dropped rather than
/// reported, so the form stays submittable while the user is mid-edit.
/// Surviving values are truncated toward zero. Output order follows the
/// input.
pub fn parse_numbers(input: &str) -> Vec<i64> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_simple_list() {
        assert_eq!(parse_numbers("1, 2, 3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_drops_invalid_and_truncates_toward_zero() {
        assert_eq!(parse_numbers("1, abc, 3.7, , -2.9"), vec![1, 3, -2]);
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert_eq!(parse_numbers(""), Vec::<i64>::new());
        assert_eq!(parse_numbers(" , ,abc"), Vec::<i64>::new());
    }

    #[test]
    fn test_non_finite_tokens_are_dropped() {
        assert_eq!(parse_numbers("inf, NaN, 5"), vec![5]);
    }

    #[test]
    fn test_preserves_input_order() {
        assert_eq!(parse_numbers("9, 1, 5"), vec![9, 1, 5]);
    }
}
