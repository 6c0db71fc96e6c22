//! Display formatting for monetary amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts stay `rust_decimal::Decimal` end to end; rounding happens here,
//! at presentation time only.

use rust_decimal::Decimal;

/// Decimal places shown for amounts and percentages.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Formats an amount as `$1,234,567.89`, rounded to two places.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMALS);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Formats a percentage as `-75.00%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(DISPLAY_DECIMALS))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
