/// Parse a table cell as a finite decimal number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected.
///
/// # Examples
/// ```
/// use rainfall2mohid::utils::parse_decimal;
///
/// assert_eq!(parse_decimal(" -22.5 "), Some(-22.5));
/// assert_eq!(parse_decimal("1e3"), Some(1000.0));
/// assert_eq!(parse_decimal("abc"), None);
/// ```
pub fn parse_decimal(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Render a parameter so that integral values keep one decimal place (`2` -> `2.0`).
pub fn format_parameter(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("5.0"), Some(5.0));
        assert_eq!(parse_decimal("-43"), Some(-43.0));
        assert_eq!(parse_decimal("\t0.25 "), Some(0.25));
    }

    #[test]
    fn test_parse_decimal_rejects_non_numeric() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal(" "), None);
        assert_eq!(parse_decimal("1,5"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_format_parameter() {
        assert_eq!(format_parameter(2.0), "2.0");
        assert_eq!(format_parameter(2.5), "2.5");
        assert_eq!(format_parameter(50000.0), "50000.0");
    }
}
