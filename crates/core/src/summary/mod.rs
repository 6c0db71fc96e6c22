//! KPI summary of one analysis run.

pub mod service;
pub mod types;

pub use service::SummaryBuilder;
pub use types::{ReportPeriod, Summary};
