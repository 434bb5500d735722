//! Brazilian-style amount input and display (`1500,50`, `R$ 1500,50`).

pub const DEFAULT_SYMBOL: &str = "R$";

const DECIMAL_SEPARATOR: char = ',';

/// Keeps only what the amount fields accept: digits and commas.
pub fn sanitize_amount_input(input: &str) -> String {
    input
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == DECIMAL_SEPARATOR)
        .collect()
}

/// Parses a typed amount. The first comma is the decimal separator and
/// parsing stops at any later one, so `"12,5,0"` reads as `12.5`.
/// Returns `None` when there are no digits to read.
pub fn parse_amount(input: &str) -> Option<f64> {
    let sanitized = sanitize_amount_input(input);
    let mut parts = sanitized.split(DECIMAL_SEPARATOR);
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    };
    normalized.parse().ok()
}

/// Parses an amount that must be strictly positive, as required for
/// expenses and the weekly budget.
pub fn parse_positive_amount(input: &str) -> Option<f64> {
    parse_amount(input).filter(|value| value.is_finite() && *value > 0.0)
}

/// Two decimals with a comma separator, e.g. `1234,50`.
pub fn format_number(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// `R$ 1234,50`.
pub fn format_amount(value: f64) -> String {
    format_amount_with(value, DEFAULT_SYMBOL)
}

pub fn format_amount_with(value: f64, symbol: &str) -> String {
    format!("{} {}", symbol, format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_decimals() {
        assert_eq!(parse_amount("50,00"), Some(50.0));
        assert_eq!(parse_amount("25,5"), Some(25.5));
        assert_eq!(parse_amount("1500"), Some(1500.0));
        assert_eq!(parse_amount(",75"), Some(0.75));
        assert_eq!(parse_amount("12,"), Some(12.0));
    }

    #[test]
    fn strips_characters_the_field_rejects() {
        assert_eq!(sanitize_amount_input("R$ 1.500,50"), "1500,50");
        assert_eq!(parse_amount("R$ 1.500,50"), Some(1500.5));
        assert_eq!(parse_amount("12,5,0"), Some(12.5));
    }

    #[test]
    fn rejects_inputs_without_digits() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(","), None);
    }

    #[test]
    fn positive_amount_excludes_zero() {
        assert_eq!(parse_positive_amount("0,00"), None);
        assert_eq!(parse_positive_amount("0,01"), Some(0.01));
    }

    #[test]
    fn formats_with_comma_and_symbol() {
        assert_eq!(format_number(25.5), "25,50");
        assert_eq!(format_amount(3500.0), "R$ 3500,00");
        assert_eq!(format_amount_with(4.5, "$"), "$ 4,50");
    }
}
