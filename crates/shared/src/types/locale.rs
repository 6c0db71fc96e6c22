//! Locale-aware parsing of decimal amounts.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Separators used by an amount written in a given locale.
///
/// The default matches Argentine exports: `1.234.567,89`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    /// Decimal separator.
    pub decimal_separator: char,
    /// Thousands (grouping) separator.
    pub thousands_separator: char,
}

/// Error returned when an amount is not a plain non-negative decimal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid amount '{0}'")]
pub struct ParseAmountError(pub String);

impl Default for NumberLocale {
    fn default() -> Self {
        Self::new(',', '.')
    }
}

impl NumberLocale {
    /// Creates a locale from its separators.
    #[must_use]
    pub const fn new(decimal_separator: char, thousands_separator: char) -> Self {
        Self {
            decimal_separator,
            thousands_separator,
        }
    }

    /// Parses a non-negative amount.
    ///
    /// Every thousands separator is dropped, then the decimal separator is
    /// replaced with `.`. Signs, exponents and stray characters are rejected.
    pub fn parse_amount(&self, raw: &str) -> Result<Decimal, ParseAmountError> {
        let err = || ParseAmountError(raw.to_string());

        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != self.thousands_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();

        let (int_part, frac_part) = match normalized.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (normalized.as_str(), None),
        };

        let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(int_part) || frac_part.is_some_and(|f| !all_digits(f)) {
            return Err(err());
        }

        Decimal::from_str(&normalized).map_err(|_| err())
    }
}
