//! Analysis error types.

use monotax_shared::AppError;
use thiserror::Error;

use crate::aggregation::AggregationError;
use crate::category::CategoryError;
use crate::ingest::IngestError;

/// Any failure that aborts an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// An input row could not be parsed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Nothing to aggregate.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    /// The category table or declared category is invalid.
    #[error(transparent)]
    Category(#[from] CategoryError),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Ingest(e) => Self::Input(e.to_string()),
            AnalysisError::Aggregation(e @ AggregationError::EmptyInput) => {
                Self::EmptyInput(e.to_string())
            }
            AnalysisError::Aggregation(e) => Self::Input(e.to_string()),
            AnalysisError::Category(e) => Self::Classification(e.to_string()),
        }
    }
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        Self::Classification(err.to_string())
    }
}
