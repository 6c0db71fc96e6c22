//! Monthly aggregation of invoice records.

use std::collections::BTreeMap;

use monotax_shared::types::YearMonth;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::AggregationError;
use super::types::{MonthlyBucket, MonthlySeries};
use crate::ingest::InvoiceRecord;

/// Groups invoice records by calendar month.
pub struct MonthlyAggregator;

impl MonthlyAggregator {
    /// Aggregates records into a chronologically ordered monthly series.
    ///
    /// Input order does not matter: buckets are keyed and sorted by month.
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::EmptyInput` if `records` is empty, or
    /// `Overflow` when a monthly or running total leaves the decimal range.
    pub fn aggregate(records: &[InvoiceRecord]) -> Result<MonthlySeries, AggregationError> {
        if records.is_empty() {
            return Err(AggregationError::EmptyInput);
        }

        let mut by_month: BTreeMap<YearMonth, (usize, Decimal)> = BTreeMap::new();
        for record in records {
            let period = YearMonth::from_date(record.issue_date);
            let entry = by_month.entry(period).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 = entry
                .1
                .checked_add(record.total_amount)
                .ok_or(AggregationError::Overflow { period })?;
        }

        let mut buckets: Vec<MonthlyBucket> = Vec::with_capacity(by_month.len());
        let mut cumulative = Decimal::ZERO;
        for (period, (invoice_count, monthly_total)) in by_month {
            cumulative = cumulative
                .checked_add(monthly_total)
                .ok_or(AggregationError::Overflow { period })?;
            let percent_variation = buckets
                .last()
                .and_then(|prev| Self::percent_change(prev.monthly_total, monthly_total));

            buckets.push(MonthlyBucket {
                period,
                invoice_count,
                monthly_total,
                cumulative_total: cumulative,
                percent_variation,
            });
        }

        debug!(
            records = records.len(),
            months = buckets.len(),
            cumulative = %cumulative,
            "aggregated monthly billing"
        );

        MonthlySeries::from_sorted(buckets)
    }

    /// Percent change from `previous` to `current`; `None` when `previous`
    /// is zero or the change does not fit in a decimal.
    #[must_use]
    pub fn percent_change(previous: Decimal, current: Decimal) -> Option<Decimal> {
        if previous.is_zero() {
            return None;
        }
        current
            .checked_sub(previous)?
            .checked_div(previous)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}
