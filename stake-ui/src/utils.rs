use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stake_core::calculations::common::round_half_up;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes
/// thousands separators (comma, space, no-break space).
fn normalize_decimal_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect()
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma and space as thousands separators (e.g. `"10 000"`).
/// Empty or whitespace-only input is treated as 0.
/// Returns an error and logs when the input is invalid (non-empty but not parseable).
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// How amounts are presented to the user.
///
/// The default mirrors Czech koruna formatting: `12 345 Kč` with no-break
/// spaces and no fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// ISO 4217 code, informational only.
    pub code: String,
    pub symbol: String,
    pub group_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            code: "CZK".to_string(),
            symbol: "Kč".to_string(),
            group_separator: "\u{a0}".to_string(),
        }
    }
}

/// Formats `amount` as whole currency units with grouped digits and a
/// trailing symbol.
pub fn format_currency(
    amount: Decimal,
    format: &CurrencyFormat,
) -> String {
    let rounded = round_half_up(amount, 0);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_digits(&digits, &format.group_separator);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if format.symbol.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}\u{a0}{}", format.symbol)
    }
}

/// Same as [`format_currency`] for whole-unit integer amounts.
pub fn format_currency_units(
    amount: i64,
    format: &CurrencyFormat,
) -> String {
    format_currency(Decimal::from(amount), format)
}

fn group_digits(
    digits: &str,
    separator: &str,
) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn plain_format() -> CurrencyFormat {
        CurrencyFormat {
            code: "CZK".to_string(),
            symbol: "Kč".to_string(),
            group_separator: " ".to_string(),
        }
    }

    #[test]
    fn parse_decimal_accepts_thousands_separators() {
        assert_eq!(parse_decimal("10,000").unwrap(), dec!(10000));
        assert_eq!(parse_decimal("10 000").unwrap(), dec!(10000));
        assert_eq!(parse_decimal("1\u{a0}234\u{a0}567").unwrap(), dec!(1234567));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  5000  ").unwrap(), dec!(5000));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("ten thousand").is_err());
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234567), &plain_format()), "1 234 567\u{a0}Kč");
        assert_eq!(format_currency(dec!(999), &plain_format()), "999\u{a0}Kč");
        assert_eq!(format_currency(dec!(1000), &plain_format()), "1 000\u{a0}Kč");
    }

    #[test]
    fn format_currency_default_uses_no_break_spaces() {
        let text = format_currency(dec!(10000), &CurrencyFormat::default());

        assert_eq!(text, "10\u{a0}000\u{a0}Kč");
    }

    #[test]
    fn format_currency_negative_amount() {
        assert_eq!(format_currency(dec!(-1028), &plain_format()), "-1 028\u{a0}Kč");
    }

    #[test]
    fn format_currency_drops_fraction() {
        assert_eq!(format_currency(dec!(1499.5), &plain_format()), "1 500\u{a0}Kč");
        assert_eq!(format_currency(dec!(-0.4), &plain_format()), "0\u{a0}Kč");
    }

    #[test]
    fn format_currency_without_symbol() {
        let format = CurrencyFormat {
            symbol: String::new(),
            ..plain_format()
        };

        assert_eq!(format_currency(dec!(2500), &format), "2 500");
    }

    #[test]
    fn format_currency_units_matches_decimal_path() {
        assert_eq!(
            format_currency_units(-90, &plain_format()),
            format_currency(dec!(-90), &plain_format())
        );
    }
}
