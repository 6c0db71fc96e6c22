//! Library side of the `monotax` command-line tool.
//!
//! Subcommand handlers live here so they can be exercised by integration
//! tests without spawning the binary.

pub mod analyze;
pub mod categories;
pub mod export;
pub mod input;
pub mod telemetry;

use monotax_core::category::CategoryTable;
use monotax_shared::{AppConfig, AppError, AppResult};

/// Resolves a regime by name (or the configured default) and builds its
/// category table.
///
/// # Errors
///
/// Returns `AppError::Configuration` for an unknown regime and
/// `AppError::Classification` for an invalid table.
pub fn load_table(config: &AppConfig, regime: Option<&str>) -> AppResult<(String, CategoryTable)> {
    let (name, regime_config) = config.regime(regime).ok_or_else(|| {
        let known: Vec<&str> = config.regimes.keys().map(String::as_str).collect();
        AppError::Configuration(format!(
            "unknown regime '{}' (configured: {})",
            regime.unwrap_or(&config.default_regime),
            known.join(", ")
        ))
    })?;

    let table = CategoryTable::from_config(regime_config)?;
    tracing::debug!(regime = name, categories = table.len(), "loaded category table");
    Ok((name.to_string(), table))
}
