//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An input row could not be parsed.
    #[error("Invalid input: {0}")]
    Input(String),

    /// The input held no invoices.
    #[error("No invoices to analyze: {0}")]
    EmptyInput(String),

    /// The category table or the requested category is invalid.
    #[error("Classification error: {0}")]
    Classification(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serializing an output failed.
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 78,
            Self::Input(_) | Self::EmptyInput(_) => 65,
            Self::Classification(_) => 64,
            Self::Io(_) => 74,
            Self::Export(_) => 70,
        }
    }

    /// Returns the error code used in log events.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Input(_) => "INVALID_INPUT",
            Self::EmptyInput(_) => "EMPTY_INPUT",
            Self::Classification(_) => "CLASSIFICATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Export(_) => "EXPORT_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
