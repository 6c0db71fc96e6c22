//! Aggregation data types.

use monotax_shared::types::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::AggregationError;

/// Billing for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Calendar month.
    pub period: YearMonth,
    /// Number of invoices issued in the month.
    pub invoice_count: usize,
    /// Sum of invoice totals for the month.
    pub monthly_total: Decimal,
    /// Running sum of monthly totals up to and including this month.
    pub cumulative_total: Decimal,
    /// Percent change against the previous bucket's monthly total.
    ///
    /// `None` for the first bucket and when the previous total is zero.
    pub percent_variation: Option<Decimal>,
}

/// Non-empty, chronologically ordered sequence of monthly buckets.
///
/// Months without invoices are absent, not zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MonthlyBucket>", into = "Vec<MonthlyBucket>")]
pub struct MonthlySeries {
    buckets: Vec<MonthlyBucket>,
}

impl MonthlySeries {
    /// Wraps buckets that are already sorted by period.
    pub(crate) fn from_sorted(buckets: Vec<MonthlyBucket>) -> Result<Self, AggregationError> {
        if buckets.is_empty() {
            return Err(AggregationError::EmptyInput);
        }
        Ok(Self { buckets })
    }

    /// Buckets in ascending period order.
    #[must_use]
    pub fn buckets(&self) -> &[MonthlyBucket] {
        &self.buckets
    }

    /// Iterates the buckets in ascending period order.
    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyBucket> {
        self.buckets.iter()
    }

    /// Number of months with billing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when the series has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Earliest bucket.
    #[must_use]
    pub fn first(&self) -> &MonthlyBucket {
        &self.buckets[0]
    }

    /// Latest bucket.
    #[must_use]
    pub fn last(&self) -> &MonthlyBucket {
        &self.buckets[self.buckets.len() - 1]
    }

    /// Sum of all monthly totals, i.e. the latest cumulative total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.last().cumulative_total
    }

    /// Highest monthly total.
    #[must_use]
    pub fn max_monthly(&self) -> Decimal {
        self.buckets
            .iter()
            .map(|b| b.monthly_total)
            .fold(self.first().monthly_total, Decimal::max)
    }

    /// Mean monthly total over the months present in the series.
    #[must_use]
    pub fn average_monthly(&self) -> Decimal {
        self.total() / Decimal::from(self.buckets.len())
    }

    /// Highest cumulative total observed.
    #[must_use]
    pub fn max_cumulative(&self) -> Decimal {
        self.buckets
            .iter()
            .map(|b| b.cumulative_total)
            .fold(self.first().cumulative_total, Decimal::max)
    }

    /// Cumulative total as of `cutoff`: the running sum of the last bucket
    /// at or before it, or zero when the cutoff precedes the series.
    #[must_use]
    pub fn cumulative_at(&self, cutoff: YearMonth) -> Decimal {
        self.buckets
            .iter()
            .take_while(|b| b.period <= cutoff)
            .last()
            .map_or(Decimal::ZERO, |b| b.cumulative_total)
    }
}

impl TryFrom<Vec<MonthlyBucket>> for MonthlySeries {
    type Error = AggregationError;

    /// Accepts buckets in strictly ascending period order whose cumulative
    /// totals are the running sums of their monthly totals.
    fn try_from(buckets: Vec<MonthlyBucket>) -> Result<Self, Self::Error> {
        let mut running = Decimal::ZERO;
        for (i, bucket) in buckets.iter().enumerate() {
            let period = bucket.period;
            if i > 0 && buckets[i - 1].period >= period {
                return Err(AggregationError::UnorderedPeriods { period });
            }
            running = running
                .checked_add(bucket.monthly_total)
                .ok_or(AggregationError::Overflow { period })?;
            if running != bucket.cumulative_total {
                return Err(AggregationError::CumulativeMismatch { period });
            }
        }
        Self::from_sorted(buckets)
    }
}

impl From<MonthlySeries> for Vec<MonthlyBucket> {
    fn from(series: MonthlySeries) -> Self {
        series.buckets
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a MonthlyBucket;
    type IntoIter = std::slice::Iter<'a, MonthlyBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
