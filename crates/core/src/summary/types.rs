//! Summary data types.

use monotax_shared::types::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::{CategoryLabel, ComplianceStatus};

/// First and last month with billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First month.
    pub start: YearMonth,
    /// Last month.
    pub end: YearMonth,
}

/// Billing KPIs. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of every monthly total.
    pub total_revenue: Decimal,
    /// Highest monthly total.
    pub max_monthly_revenue: Decimal,
    /// Mean monthly total over months with billing.
    pub average_monthly_revenue: Decimal,
    /// Variation of the last month against the one before.
    pub latest_variation: Option<Decimal>,
    /// Number of months with billing.
    pub months_billed: usize,
    /// Cumulative amount that was classified.
    pub cumulative_revenue: Decimal,
    /// Current category, if any.
    pub current_category: Option<CategoryLabel>,
    /// Ceiling of the current category.
    pub current_ceiling: Decimal,
    /// Amount above the current ceiling.
    pub excess_amount: Decimal,
    /// Amount left before the current ceiling.
    pub headroom_amount: Decimal,
    /// Next eligible category, if any.
    pub next_eligible_category: Option<CategoryLabel>,
    /// Compliance status.
    pub status: ComplianceStatus,
    /// Months covered.
    pub period: ReportPeriod,
}
