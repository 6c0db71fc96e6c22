//! Normalization of raw invoice rows into typed records.

pub mod error;
pub mod parser;
pub mod types;

pub use error::IngestError;
pub use parser::RecordParser;
pub use types::{InvoiceRecord, ParserSettings, RawRow};
