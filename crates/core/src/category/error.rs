//! Category error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Category table and classification errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The table has no thresholds.
    #[error("Category table is empty")]
    EmptyTable,

    /// A label is not a single letter.
    #[error("Invalid category label '{0}', expected a single letter")]
    InvalidLabel(String),

    /// Two thresholds share a label.
    #[error("Duplicate category label: {0}")]
    DuplicateLabel(char),

    /// Two thresholds share a ceiling.
    #[error("Categories {lower} and {upper} share the ceiling {ceiling}")]
    NonIncreasingCeiling {
        /// Label sorted first.
        lower: char,
        /// Label sorted second.
        upper: char,
        /// Shared ceiling.
        ceiling: Decimal,
    },

    /// A ceiling is negative.
    #[error("Category {label} has a negative ceiling {ceiling}")]
    NegativeCeiling {
        /// Offending label.
        label: char,
        /// Offending ceiling.
        ceiling: Decimal,
    },

    /// The requested category is not in the table.
    #[error("Unknown category: {0}")]
    UnknownCategory(char),
}
