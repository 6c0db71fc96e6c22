//! Common types used across the application.

pub mod locale;
pub mod money;
pub mod period;

pub use locale::{NumberLocale, ParseAmountError};
pub use money::{format_currency, format_percent};
pub use period::{ParseYearMonthError, YearMonth};
