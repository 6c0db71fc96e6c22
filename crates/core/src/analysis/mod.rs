//! End-to-end analysis of one taxpayer's invoices.

pub mod error;
pub mod service;
pub mod types;

pub use error::AnalysisError;
pub use service::AnalysisService;
pub use types::{AnalysisReport, AnalysisRequest};
