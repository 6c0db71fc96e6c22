//! Application configuration management.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::NumberLocale;

/// Built-in defaults, layered underneath every other source.
const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Input file configuration.
    pub input: InputConfig,
    /// Named category tables, keyed by regime name.
    #[serde(default)]
    pub regimes: BTreeMap<String, RegimeConfig>,
    /// Regime used when the caller does not name one.
    pub default_regime: String,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Input file configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Field delimiter of the CSV export.
    pub delimiter: char,
    /// Column holding the invoice issue date.
    pub date_column: String,
    /// Column holding the invoice total amount.
    pub amount_column: String,
    /// `chrono` format string for issue dates.
    pub date_format: String,
    /// Decimal separator used by amounts.
    pub decimal_separator: char,
    /// Thousands separator used by amounts.
    pub thousands_separator: char,
}

impl InputConfig {
    /// Returns the number locale described by the separators.
    #[must_use]
    pub const fn number_locale(&self) -> NumberLocale {
        NumberLocale::new(self.decimal_separator, self.thousands_separator)
    }
}

/// One regime version: an unordered list of category ceilings.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeConfig {
    /// Human readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category ceilings.
    pub categories: Vec<CategoryConfig>,
}

/// A single category entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// Category label (a single letter).
    pub label: String,
    /// Annual revenue ceiling. Written as a string to keep full precision.
    pub ceiling: Decimal,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

impl AppConfig {
    /// Loads configuration from the built-in defaults, config files and
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(None)
    }

    /// Parses the built-in defaults alone, ignoring files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded defaults are malformed.
    pub fn builtin() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()?
            .try_deserialize()
    }

    /// Same as [`AppConfig::load`], with an optional explicit file layered
    /// above the run-mode file.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing or any source is
    /// malformed.
    pub fn load_with(extra: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("MONOTAX")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Looks up a regime by name, falling back to `default_regime`.
    #[must_use]
    pub fn regime(&self, name: Option<&str>) -> Option<(&str, &RegimeConfig)> {
        let name = name.unwrap_or(&self.default_regime);
        self.regimes
            .get_key_value(name)
            .map(|(key, regime)| (key.as_str(), regime))
    }
}
