//! Classification data types.

use monotax_shared::types::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::table::{CategoryLabel, CategoryThreshold};
use crate::aggregation::MonthlySeries;

/// Result of a bracket search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bracket {
    /// The smallest category whose ceiling still contains the amount.
    Within {
        /// Position in ascending ceiling order.
        index: usize,
        /// The matching threshold.
        threshold: CategoryThreshold,
    },
    /// The amount exceeds every ceiling in the table.
    AboveRegime,
}

impl Bracket {
    /// Position in ascending order, `None` above the regime.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Within { index, .. } => Some(*index),
            Self::AboveRegime => None,
        }
    }

    /// Category label, `None` above the regime.
    #[must_use]
    pub const fn label(&self) -> Option<CategoryLabel> {
        match self {
            Self::Within { threshold, .. } => Some(threshold.label),
            Self::AboveRegime => None,
        }
    }

    /// True when no category admits the amount.
    #[must_use]
    pub const fn is_above_regime(&self) -> bool {
        matches!(self, Self::AboveRegime)
    }
}

/// How the current category is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "category", rename_all = "snake_case")]
pub enum CategoryMode {
    /// The taxpayer's declared category.
    Declared(CategoryLabel),
    /// The bracket containing the assessed amount.
    Observed,
}

/// Which cumulative figure is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "point", content = "cutoff", rename_all = "snake_case")]
pub enum AccumulationPoint {
    /// Highest cumulative total observed in the series.
    #[default]
    Maximum,
    /// Running total at the given month, inclusive.
    Cutoff(YearMonth),
}

impl AccumulationPoint {
    /// Resolves the amount to classify from a monthly series.
    #[must_use]
    pub fn resolve(&self, series: &MonthlySeries) -> Decimal {
        match self {
            Self::Maximum => series.max_cumulative(),
            Self::Cutoff(cutoff) => series.cumulative_at(*cutoff),
        }
    }
}

/// Position of the assessed amount against the current ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Below the ceiling.
    Within,
    /// Exactly at the ceiling. Still compliant.
    AtCeiling,
    /// Above the current ceiling, but another category admits the amount.
    Exceeded,
    /// Above every ceiling in the regime.
    AboveRegime,
}

impl ComplianceStatus {
    /// True for `Within` and `AtCeiling`.
    #[must_use]
    pub const fn is_compliant(self) -> bool {
        matches!(self, Self::Within | Self::AtCeiling)
    }
}

/// Bracket placement of one cumulative amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Mode used to pick the current category.
    pub mode: CategoryMode,
    /// Cumulative amount that was classified.
    pub assessed_amount: Decimal,
    /// Bracket containing the assessed amount.
    pub bracket: Bracket,
    /// Current category; `None` in observed mode above the regime.
    pub current_category: Option<CategoryLabel>,
    /// Ceiling the excess and headroom are measured against.
    pub current_ceiling: Decimal,
    /// Category the taxpayer should look at next, if any.
    pub next_eligible_category: Option<CategoryLabel>,
    /// `max(0, assessed - ceiling)`.
    pub excess_amount: Decimal,
    /// `max(0, ceiling - assessed)`.
    pub headroom_amount: Decimal,
    /// Compliance status.
    pub status: ComplianceStatus,
}
