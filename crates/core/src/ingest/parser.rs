//! Record parser: raw rows in, typed invoice records out.

use chrono::NaiveDate;
use tracing::debug;

use super::error::IngestError;
use super::types::{InvoiceRecord, ParserSettings, RawRow};

/// Parses raw rows into [`InvoiceRecord`]s.
///
/// Parsing is all-or-nothing: the first bad row aborts the whole batch.
#[derive(Debug, Clone)]
pub struct RecordParser {
    settings: ParserSettings,
}

impl RecordParser {
    /// Creates a parser with the given settings.
    #[must_use]
    pub const fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    /// Parser settings.
    #[must_use]
    pub const fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parses every row, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`IngestError`] encountered.
    pub fn parse<I>(&self, rows: I) -> Result<Vec<InvoiceRecord>, IngestError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| self.parse_row(index + 1, &row))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(records = records.len(), "parsed invoice rows");
        Ok(records)
    }

    /// Parses a single row. `row` is the 1-based row number used in errors.
    ///
    /// # Errors
    ///
    /// Returns an [`IngestError`] describing the first problem in the row.
    pub fn parse_row(&self, row: usize, raw: &RawRow) -> Result<InvoiceRecord, IngestError> {
        let date_raw = Self::field(row, raw, &self.settings.date_column)?;
        let amount_raw = Self::field(row, raw, &self.settings.amount_column)?;

        let issue_date = NaiveDate::parse_from_str(date_raw.trim(), &self.settings.date_format)
            .map_err(|_| IngestError::InvalidDate {
                row,
                value: date_raw.to_string(),
                format: self.settings.date_format.clone(),
            })?;

        let total_amount = self
            .settings
            .locale
            .parse_amount(amount_raw)
            .map_err(|_| IngestError::InvalidAmount {
                row,
                value: amount_raw.to_string(),
            })?;

        Ok(InvoiceRecord {
            issue_date,
            total_amount,
        })
    }

    fn field<'a>(
        row: usize,
        raw: &'a RawRow,
        column: &str,
    ) -> Result<&'a str, IngestError> {
        raw.get(column)
            .map(String::as_str)
            .ok_or_else(|| IngestError::MalformedInput {
                row,
                column: column.to_string(),
            })
    }
}
