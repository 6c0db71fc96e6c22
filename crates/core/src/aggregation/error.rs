//! Aggregation error types.

use monotax_shared::types::YearMonth;
use thiserror::Error;

/// Aggregation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// No records to aggregate.
    #[error("No invoice records to aggregate")]
    EmptyInput,

    /// A monthly or running total does not fit in a decimal.
    #[error("Billing total for {period} is too large to represent")]
    Overflow {
        /// Month whose total overflowed.
        period: YearMonth,
    },

    /// Buckets are not in strictly ascending period order.
    #[error("Monthly series is not in ascending order at {period}")]
    UnorderedPeriods {
        /// First out-of-order month.
        period: YearMonth,
    },

    /// A cumulative total differs from the running sum of monthly totals.
    #[error("Cumulative total for {period} does not match the running sum")]
    CumulativeMismatch {
        /// Month with the inconsistent total.
        period: YearMonth,
    },
}
