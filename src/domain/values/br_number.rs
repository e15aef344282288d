//! Brazilian-locale numeric parsing.
//!
//! Fundamentus renders every number with `.` as the thousands separator
//! and `,` as the decimal separator, optionally prefixed with `R$` or
//! suffixed with `%`. Coercion failure is a normal outcome here: the
//! caller gets `None`, never an error and never a silent zero.

/// Parse a BR-locale formatted number ("R$ 1.234,56", "12,34%", "0,95").
pub fn parse_br_number(raw: &str) -> Option<f64> {
    let cleaned = raw
        .replace("R$", "")
        .replace('.', "")
        .replace(',', ".")
        .replace('%', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Parse a BR-locale percentage and scale it to a fraction ("12,34%" -> 0.1234).
pub fn parse_br_percent(raw: &str) -> Option<f64> {
    parse_br_number(raw).map(|v| v / 100.0)
}

/// Nullable-integer coercion: parses as a BR number, then only accepts
/// whole values. Fractional or garbage input is `None`, not zero.
pub fn parse_br_integer(raw: &str) -> Option<i64> {
    let value = parse_br_number(raw)?;
    if value.fract() == 0.0 && value.is_finite() {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_with_thousands() {
        assert_eq!(parse_br_number("R$ 1.234,56"), Some(1234.56));
        assert_eq!(parse_br_number("400.000"), Some(400000.0));
    }

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(parse_br_number("0,95"), Some(0.95));
        assert_eq!(parse_br_number("1,00"), Some(1.0));
    }

    #[test]
    fn test_percent_becomes_fraction() {
        assert_eq!(parse_br_percent("12,34%"), Some(0.1234));
        assert_eq!(parse_br_percent("8,00%"), Some(0.08));
        assert_eq!(parse_br_percent("0,00%"), Some(0.0));
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_br_number(""), None);
        assert_eq!(parse_br_number("   "), None);
        assert_eq!(parse_br_number("N/A"), None);
        assert_eq!(parse_br_number("-"), None);
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(parse_br_integer("42"), Some(42));
        assert_eq!(parse_br_integer("1.250"), Some(1250));
        assert_eq!(parse_br_integer("3,5"), None);
        assert_eq!(parse_br_integer("abc"), None);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(parse_br_number("-1,25"), Some(-1.25));
        assert_eq!(parse_br_percent("-0,80%"), Some(-0.008));
    }
}
