//! Core business logic for Monotax.
//!
//! This crate contains pure business logic with ZERO file, network or
//! terminal dependencies. Rows come in as plain maps; reports go out as
//! serializable values and text.
//!
//! # Modules
//!
//! - `ingest` - Raw invoice rows to typed records
//! - `aggregation` - Monthly totals, running totals and variation
//! - `category` - Category tables and bracket classification
//! - `summary` - KPI summary of a run
//! - `analysis` - The end-to-end pipeline
//! - `report` - Plain-text rendering

pub mod aggregation;
pub mod analysis;
pub mod category;
pub mod ingest;
pub mod report;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use analysis::{AnalysisError, AnalysisReport, AnalysisRequest, AnalysisService};
