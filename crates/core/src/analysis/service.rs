//! Analysis pipeline: parse, aggregate, classify, summarize.

use tracing::{debug, info};

use super::error::AnalysisError;
use super::types::{AnalysisReport, AnalysisRequest};
use crate::aggregation::MonthlyAggregator;
use crate::category::{CategoryClassifier, CategoryTable};
use crate::ingest::{InvoiceRecord, RawRow, RecordParser};
use crate::summary::SummaryBuilder;

/// Runs analyses against one category table.
///
/// Holds no per-run state; the same service can serve any number of runs.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    table: CategoryTable,
    parser: RecordParser,
}

impl AnalysisService {
    /// Creates a service for `table`, reading rows with `parser`.
    #[must_use]
    pub const fn new(table: CategoryTable, parser: RecordParser) -> Self {
        Self { table, parser }
    }

    /// The category table in use.
    #[must_use]
    pub const fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Parses raw rows and analyzes them.
    ///
    /// # Errors
    ///
    /// Returns the first parsing error, `EmptyInput` when there are no rows,
    /// or `UnknownCategory` for a declared category missing from the table.
    pub fn run<I>(&self, rows: I, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let records = self.parser.parse(rows)?;
        self.analyze(&records, request)
    }

    /// Analyzes already parsed records.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `records` is empty, or `UnknownCategory`
    /// for a declared category missing from the table.
    pub fn analyze(
        &self,
        records: &[InvoiceRecord],
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport, AnalysisError> {
        let series = MonthlyAggregator::aggregate(records)?;

        let classifier = CategoryClassifier::new(&self.table);
        let assessed = request.accumulation.resolve(&series);
        debug!(
            accumulation = ?request.accumulation,
            assessed = %assessed,
            "resolved assessed amount"
        );

        let classification = classifier.classify(assessed, request.category_mode)?;
        let relevant_categories = classifier
            .relevant_category_subset(series.max_cumulative())
            .to_vec();
        let summary = SummaryBuilder::build(&series, &classification);

        info!(
            taxpayer = %request.taxpayer,
            regime = %request.regime,
            months = series.len(),
            status = ?classification.status,
            "analysis complete"
        );

        Ok(AnalysisReport {
            taxpayer: request.taxpayer.clone(),
            regime: request.regime.clone(),
            accumulation: request.accumulation,
            series,
            classification,
            summary,
            relevant_categories,
        })
    }
}
