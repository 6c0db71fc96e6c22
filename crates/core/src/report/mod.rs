//! Plain-text rendering of an analysis report.
//!
//! This is the only place amounts are rounded.

use std::fmt;

use monotax_shared::types::{format_currency, format_percent};

use crate::analysis::AnalysisReport;
use crate::category::{AccumulationPoint, CategoryMode, ComplianceStatus};

/// Displays an [`AnalysisReport`] as a human readable document.
pub struct TextReport<'a>(pub &'a AnalysisReport);

/// Renders `report` to a string.
#[must_use]
pub fn render_text(report: &AnalysisReport) -> String {
    TextReport(report).to_string()
}

fn variation(value: Option<rust_decimal::Decimal>) -> String {
    value.map_or_else(|| "n/a".to_string(), format_percent)
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let summary = &report.summary;
        let classification = &report.classification;
        let period = format!("{} to {}", summary.period.start, summary.period.end);

        writeln!(f, "Monotributo analysis - {}", report.taxpayer)?;
        writeln!(f, "Period: {period}")?;
        writeln!(f, "Regime: {}", report.regime)?;
        writeln!(f)?;

        writeln!(f, "Billing KPIs")?;
        writeln!(f, "  Total billed:             {}", format_currency(summary.total_revenue))?;
        writeln!(
            f,
            "  Average monthly billing:  {}",
            format_currency(summary.average_monthly_revenue)
        )?;
        writeln!(
            f,
            "  Latest monthly variation: {}",
            variation(summary.latest_variation)
        )?;
        writeln!(f)?;

        writeln!(f, "Monthly billing")?;
        writeln!(
            f,
            "  {:<8} {:>9} {:>20} {:>20} {:>10}",
            "Month", "Invoices", "Billed", "Cumulative", "Variation"
        )?;
        for bucket in &report.series {
            writeln!(
                f,
                "  {:<8} {:>9} {:>20} {:>20} {:>10}",
                bucket.period.to_string(),
                bucket.invoice_count,
                format_currency(bucket.monthly_total),
                format_currency(bucket.cumulative_total),
                variation(bucket.percent_variation)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Category")?;
        let source = match classification.mode {
            CategoryMode::Declared(_) => "declared",
            CategoryMode::Observed => "observed",
        };
        match classification.current_category {
            Some(label) => writeln!(
                f,
                "  Current category: {label} ({source}, ceiling {})",
                format_currency(classification.current_ceiling)
            )?,
            None => writeln!(
                f,
                "  Current category: none ({source}, highest ceiling {})",
                format_currency(classification.current_ceiling)
            )?,
        }
        match classification.next_eligible_category {
            Some(label) => writeln!(f, "  Next category: {label}")?,
            None => writeln!(f, "  Next category: none")?,
        }
        match report.accumulation {
            AccumulationPoint::Maximum => {
                writeln!(f, "  Assessed on: maximum cumulative billing")?;
            }
            AccumulationPoint::Cutoff(cutoff) => {
                writeln!(f, "  Assessed on: cumulative billing through {cutoff}")?;
            }
        }
        match classification.status {
            ComplianceStatus::Within => writeln!(f, "  Status: within the category ceiling")?,
            ComplianceStatus::AtCeiling => writeln!(f, "  Status: exactly at the category ceiling")?,
            ComplianceStatus::Exceeded => match classification.bracket.label() {
                Some(label) => writeln!(
                    f,
                    "  ALERT: billing exceeds the category ceiling. Current billing falls in category {label}."
                )?,
                None => writeln!(f, "  ALERT: billing exceeds the category ceiling.")?,
            },
            ComplianceStatus::AboveRegime => writeln!(
                f,
                "  ALERT: billing exceeds the category ceiling. No higher category is available."
            )?,
        }
        writeln!(f)?;

        writeln!(f, "Billing summary for {period}")?;
        let rows = [
            ("Total billed", summary.total_revenue),
            ("Maximum monthly billing", summary.max_monthly_revenue),
            ("Cumulative billing", summary.cumulative_revenue),
            ("Current category ceiling", summary.current_ceiling),
            ("Excess billing", summary.excess_amount),
            ("Available billing", summary.headroom_amount),
        ];
        for (name, amount) in rows {
            writeln!(f, "  {:<26}{}", format!("{name}:"), format_currency(amount))?;
        }
        writeln!(f)?;

        writeln!(f, "Thresholds in scope")?;
        for threshold in &report.relevant_categories {
            writeln!(
                f,
                "  Category {}: {}",
                threshold.label,
                format_currency(threshold.ceiling)
            )?;
        }

        Ok(())
    }
}
