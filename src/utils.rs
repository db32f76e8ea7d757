/// Parse a shift amount the way a permissive input field would: integer text
/// wins, fractional text is truncated toward zero, and anything non-numeric
/// or non-finite ("abc", "NaN", "inf", empty) falls back to 0.
///
/// Never errors; malformed input is a zero shift, not a failure.
pub fn parse_shift(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return n;
    }

    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_with_whitespace() {
        assert_eq!(parse_shift("3"), 3);
        assert_eq!(parse_shift("  -7 "), -7);
        assert_eq!(parse_shift("+12"), 12);
    }

    #[test]
    fn truncates_fractional_input() {
        assert_eq!(parse_shift("3.9"), 3);
        assert_eq!(parse_shift("-3.9"), -3);
    }

    #[test]
    fn malformed_input_is_zero() {
        assert_eq!(parse_shift("abc"), 0);
        assert_eq!(parse_shift(""), 0);
        assert_eq!(parse_shift("NaN"), 0);
        assert_eq!(parse_shift("inf"), 0);
        assert_eq!(parse_shift("-inf"), 0);
        assert_eq!(parse_shift("1e999"), 0);
    }
}
