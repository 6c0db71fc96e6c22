//! `monotax analyze`: reads an invoice export and reports the taxpayer's
//! category standing.
//!
//! ```bash
//! monotax analyze --input facturas.csv --taxpayer "Juana Pérez" --declared A
//! monotax analyze --input facturas.csv --taxpayer "Juana Pérez" --cutoff 2024-06 --format json
//! ```

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use monotax_core::category::{AccumulationPoint, CategoryLabel, CategoryMode};
use monotax_core::ingest::{ParserSettings, RecordParser};
use monotax_core::{AnalysisReport, AnalysisRequest, AnalysisService};
use monotax_shared::types::YearMonth;
use monotax_shared::{AppConfig, AppResult};

use crate::export::{OutputFormat, render, write_series_csv};
use crate::input::read_rows;
use crate::load_table;

/// Arguments of the analyze subcommand.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Invoice export to read.
    #[arg(long, short)]
    pub input: PathBuf,

    /// Taxpayer name shown in the report.
    #[arg(long)]
    pub taxpayer: String,

    /// Regime whose category table applies. Defaults to the configured one.
    #[arg(long)]
    pub regime: Option<String>,

    /// Declared category letter. Without it the category is inferred from
    /// billing.
    #[arg(long)]
    pub declared: Option<CategoryLabel>,

    /// Assess cumulative billing through this month (YYYY-MM) instead of
    /// the maximum.
    #[arg(long)]
    pub cutoff: Option<YearMonth>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the monthly series as CSV to this path.
    #[arg(long)]
    pub series_csv: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// The analysis request these arguments describe.
    pub fn request(&self, regime: String) -> AnalysisRequest {
        AnalysisRequest {
            taxpayer: self.taxpayer.clone(),
            regime,
            category_mode: self
                .declared
                .map_or(CategoryMode::Observed, CategoryMode::Declared),
            accumulation: self
                .cutoff
                .map_or(AccumulationPoint::Maximum, AccumulationPoint::Cutoff),
        }
    }
}

/// Runs the full analysis over a delimited export read from `reader`.
///
/// # Errors
///
/// Returns an `AppError` for an unknown regime, unreadable input, a row that
/// fails to parse, an empty export or an unknown declared category.
pub fn analyze_reader<R: Read>(
    reader: R,
    args: &AnalyzeArgs,
    config: &AppConfig,
) -> AppResult<AnalysisReport> {
    let (regime, table) = load_table(config, args.regime.as_deref())?;
    let rows = read_rows(reader, &config.input)?;
    tracing::debug!(rows = rows.len(), "read invoice rows");

    let parser = RecordParser::new(ParserSettings::from(&config.input));
    let service = AnalysisService::new(table, parser);
    let report = service.run(rows, &args.request(regime))?;
    Ok(report)
}

/// Execute the analyze subcommand.
pub fn run_analyze(args: &AnalyzeArgs, config: &AppConfig) -> Result<u8> {
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let report = analyze_reader(BufReader::new(file), args, config)?;

    if let Some(path) = &args.series_csv {
        let out = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_series_csv(out, &report.series)?;
        tracing::info!(path = %path.display(), "wrote monthly series");
    }

    let rendered = render(&report, args.format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote report");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(0)
}
