//! Summary assembly.

use crate::aggregation::MonthlySeries;
use crate::category::Classification;

use super::types::{ReportPeriod, Summary};

/// Builds a [`Summary`] from aggregation and classification results.
pub struct SummaryBuilder;

impl SummaryBuilder {
    /// Assembles the summary. No rounding is applied.
    #[must_use]
    pub fn build(series: &MonthlySeries, classification: &Classification) -> Summary {
        Summary {
            total_revenue: series.total(),
            max_monthly_revenue: series.max_monthly(),
            average_monthly_revenue: series.average_monthly(),
            latest_variation: series.last().percent_variation,
            months_billed: series.len(),
            cumulative_revenue: classification.assessed_amount,
            current_category: classification.current_category,
            current_ceiling: classification.current_ceiling,
            excess_amount: classification.excess_amount,
            headroom_amount: classification.headroom_amount,
            next_eligible_category: classification.next_eligible_category,
            status: classification.status,
            period: ReportPeriod {
                start: series.first().period,
                end: series.last().period,
            },
        }
    }
}
