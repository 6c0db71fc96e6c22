//! Ingestion data types.

use std::collections::HashMap;

use chrono::NaiveDate;
use monotax_shared::config::InputConfig;
use monotax_shared::types::NumberLocale;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw input row: column name to text value.
///
/// Columns other than the date and amount pass through untouched.
pub type RawRow = HashMap<String, String>;

/// A single invoice, reduced to what the analysis needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Invoice total, never negative.
    pub total_amount: Decimal,
}

/// Where and how to read the date and amount of each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    /// Column holding the issue date.
    pub date_column: String,
    /// Column holding the invoice total.
    pub amount_column: String,
    /// `chrono` format string for the issue date.
    pub date_format: String,
    /// Separators used by the amount column.
    pub locale: NumberLocale,
}

impl From<&InputConfig> for ParserSettings {
    fn from(input: &InputConfig) -> Self {
        Self {
            date_column: input.date_column.clone(),
            amount_column: input.amount_column.clone(),
            date_format: input.date_format.clone(),
            locale: input.number_locale(),
        }
    }
}
