//! Monthly revenue aggregation.

pub mod error;
pub mod service;
pub mod types;


pub use error::AggregationError;
pub use service::MonthlyAggregator;
pub use types::{MonthlyBucket, MonthlySeries};
