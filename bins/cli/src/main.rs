//! # monotax CLI entry point
//!
//! Parses command-line arguments, loads configuration and dispatches to the
//! subcommand handlers in the library crate.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use monotax_cli::analyze::{AnalyzeArgs, run_analyze};
use monotax_cli::categories::{CategoriesArgs, run_categories};
use monotax_cli::telemetry::init_tracing;
use monotax_shared::{AppConfig, AppError};

/// Monotributo revenue analysis.
///
/// Aggregates an invoice export by month and reports where cumulative
/// billing sits against the category ceilings of a regime.
#[derive(Parser, Debug)]
#[command(name = "monotax", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to an extra configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze an invoice export.
    Analyze(AnalyzeArgs),

    /// List the category ceilings of a regime.
    Categories(CategoriesArgs),
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match AppConfig::load_with(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = AppError::from(e);
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.logging, cli.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "monotax starting");

    let result = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &config),
        Commands::Categories(args) => run_categories(args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let code = exit_code(&e);
            tracing::error!(exit_code = code, "{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(code)
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return app.exit_code();
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return AppError::Io(String::new()).exit_code();
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use monotax_cli::export::OutputFormat;

    #[test]
    fn cli_parse_analyze_minimal() {
        let cli = Cli::try_parse_from([
            "monotax",
            "analyze",
            "--input",
            "facturas.csv",
            "--taxpayer",
            "Juana Pérez",
        ])
        .unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.input, PathBuf::from("facturas.csv"));
        assert!(args.declared.is_none());
        assert!(args.cutoff.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_analyze_full() {
        let cli = Cli::try_parse_from([
            "monotax",
            "-vv",
            "--config",
            "local.toml",
            "analyze",
            "-i",
            "facturas.csv",
            "--taxpayer",
            "Juana",
            "--regime",
            "pre_indexation",
            "--declared",
            "b",
            "--cutoff",
            "2024-06",
            "--format",
            "json",
            "--series-csv",
            "series.csv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("local.toml")));
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.declared.map(|l| l.as_char()), Some('B'));
        assert_eq!(args.cutoff.map(|c| c.to_string()).as_deref(), Some("2024-06"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.regime.as_deref(), Some("pre_indexation"));
    }

    #[test]
    fn cli_parse_rejects_bad_cutoff() {
        let result = Cli::try_parse_from([
            "monotax",
            "analyze",
            "--input",
            "f.csv",
            "--taxpayer",
            "Juana",
            "--cutoff",
            "2024-13",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_categories() {
        let cli = Cli::try_parse_from(["monotax", "categories"]).unwrap();
        let Commands::Categories(args) = cli.command else {
            panic!("expected categories");
        };
        assert!(args.regime.is_none());
    }

    #[test]
    fn test_exit_code_mapping() {
        let err = anyhow::Error::from(AppError::Input("row 2".into()));
        assert_eq!(exit_code(&err), 65);

        let err = anyhow::Error::from(std::io::Error::other("disk"))
            .context("failed to open facturas.csv");
        assert_eq!(exit_code(&err), 74);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}
