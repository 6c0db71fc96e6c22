//! Ingestion error types.

use thiserror::Error;

/// Errors raised while parsing raw invoice rows.
///
/// Rows are numbered from 1, the first data row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// A required column is missing from the row.
    #[error("Row {row}: missing required column '{column}'")]
    MalformedInput {
        /// Row number.
        row: usize,
        /// Missing column name.
        column: String,
    },

    /// The issue date does not match the expected format.
    #[error("Row {row}: invalid issue date '{value}' (expected format {format})")]
    InvalidDate {
        /// Row number.
        row: usize,
        /// Offending value.
        value: String,
        /// Expected `chrono` format.
        format: String,
    },

    /// The amount is not a non-negative decimal.
    #[error("Row {row}: invalid total amount '{value}'")]
    InvalidAmount {
        /// Row number.
        row: usize,
        /// Offending value.
        value: String,
    },
}

impl IngestError {
    /// Row number the error refers to.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::MalformedInput { row, .. }
            | Self::InvalidDate { row, .. }
            | Self::InvalidAmount { row, .. } => *row,
        }
    }
}
