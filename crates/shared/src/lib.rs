//! Shared types, errors, and configuration for Monotax.
//!
//! This crate provides common types used across all other crates:
//! - Calendar month type used as the aggregation key
//! - Locale-aware amount parsing and display formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
