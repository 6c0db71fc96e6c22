//! Output formats for analysis reports.

use std::io::Write;

use clap::ValueEnum;
use csv::WriterBuilder;
use monotax_core::aggregation::MonthlySeries;
use monotax_core::report::render_text;
use monotax_core::AnalysisReport;
use monotax_shared::{AppError, AppResult};

/// Report format written to the main output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// Pretty-printed JSON of the full report.
    Json,
}

#[derive(serde::Serialize)]
struct SeriesRow {
    period: String,
    invoice_count: usize,
    monthly_total: String,
    cumulative_total: String,
    percent_variation: Option<String>,
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns `AppError::Export` if JSON serialization fails.
pub fn render(report: &AnalysisReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| AppError::Export(e.to_string()))
        }
    }
}

/// Writes the monthly series as CSV, one row per month. Amounts are written
/// unrounded.
///
/// # Errors
///
/// Returns `AppError::Export` if a row cannot be written.
pub fn write_series_csv<W: Write>(w: W, series: &MonthlySeries) -> AppResult<()> {
    let mut wrt = WriterBuilder::new().from_writer(w);

    for bucket in series {
        let out = SeriesRow {
            period: bucket.period.to_string(),
            invoice_count: bucket.invoice_count,
            monthly_total: bucket.monthly_total.to_string(),
            cumulative_total: bucket.cumulative_total.to_string(),
            percent_variation: bucket.percent_variation.map(|v| v.to_string()),
        };
        wrt.serialize(out)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    wrt.flush()?;
    Ok(())
}
