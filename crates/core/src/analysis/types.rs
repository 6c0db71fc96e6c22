//! Analysis request and report types.

use serde::{Deserialize, Serialize};

use crate::aggregation::MonthlySeries;
use crate::category::{AccumulationPoint, CategoryMode, CategoryThreshold, Classification};
use crate::summary::Summary;

/// Parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Taxpayer name, used in report titles.
    pub taxpayer: String,
    /// Name of the regime the table was built from.
    pub regime: String,
    /// How the current category is chosen.
    pub category_mode: CategoryMode,
    /// Which cumulative figure is classified.
    pub accumulation: AccumulationPoint,
}

/// Everything presentation and export layers need from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Taxpayer name.
    pub taxpayer: String,
    /// Regime name.
    pub regime: String,
    /// Which cumulative figure was classified.
    pub accumulation: AccumulationPoint,
    /// Monthly series, for charting.
    pub series: MonthlySeries,
    /// Bracket placement, for alerting.
    pub classification: Classification,
    /// KPIs, for display and export.
    pub summary: Summary,
    /// Thresholds worth plotting next to the series.
    pub relevant_categories: Vec<CategoryThreshold>,
}
