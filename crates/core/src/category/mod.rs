//! Category thresholds and bracket classification.

pub mod classifier;
pub mod error;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use classifier::CategoryClassifier;
pub use error::CategoryError;
pub use table::{CategoryLabel, CategoryTable, CategoryThreshold};
pub use types::{AccumulationPoint, Bracket, CategoryMode, Classification, ComplianceStatus};
