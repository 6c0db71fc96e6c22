//! Immutable, ceiling-ordered category table.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use monotax_shared::config::RegimeConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CategoryError;

/// Single-letter category code, always uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryLabel(char);

impl CategoryLabel {
    /// Creates a label from an ASCII letter.
    pub fn new(letter: char) -> Result<Self, CategoryError> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter.to_ascii_uppercase()))
        } else {
            Err(CategoryError::InvalidLabel(letter.to_string()))
        }
    }

    /// The letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryLabel {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Self::new(letter).map_err(|_| CategoryError::InvalidLabel(s.to_string()))
            }
            _ => Err(CategoryError::InvalidLabel(s.to_string())),
        }
    }
}

impl TryFrom<String> for CategoryLabel {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryLabel> for String {
    fn from(value: CategoryLabel) -> Self {
        value.to_string()
    }
}

/// One category and its annual revenue ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryThreshold {
    /// Category code.
    pub label: CategoryLabel,
    /// Highest annual revenue the category admits, inclusive.
    pub ceiling: Decimal,
}

impl CategoryThreshold {
    /// Creates a threshold.
    #[must_use]
    pub const fn new(label: CategoryLabel, ceiling: Decimal) -> Self {
        Self { label, ceiling }
    }
}

/// Ordered set of category thresholds.
///
/// Labels are unique and ceilings strictly increase in iteration order.
/// The table never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    thresholds: Vec<CategoryThreshold>,
}

impl CategoryTable {
    /// Builds a table from thresholds in any order.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyTable`, `DuplicateLabel`,
    /// `NegativeCeiling` or `NonIncreasingCeiling` when the thresholds do
    /// not describe a valid regime.
    pub fn new(mut thresholds: Vec<CategoryThreshold>) -> Result<Self, CategoryError> {
        if thresholds.is_empty() {
            return Err(CategoryError::EmptyTable);
        }

        let mut seen = HashSet::with_capacity(thresholds.len());
        for threshold in &thresholds {
            if !seen.insert(threshold.label) {
                return Err(CategoryError::DuplicateLabel(threshold.label.as_char()));
            }
            if threshold.ceiling.is_sign_negative() && !threshold.ceiling.is_zero() {
                return Err(CategoryError::NegativeCeiling {
                    label: threshold.label.as_char(),
                    ceiling: threshold.ceiling,
                });
            }
        }

        thresholds.sort_by(|a, b| a.ceiling.cmp(&b.ceiling));
        if let Some(pair) = thresholds
            .windows(2)
            .find(|pair| pair[0].ceiling >= pair[1].ceiling)
        {
            return Err(CategoryError::NonIncreasingCeiling {
                lower: pair[0].label.as_char(),
                upper: pair[1].label.as_char(),
                ceiling: pair[1].ceiling,
            });
        }

        Ok(Self { thresholds })
    }

    /// Builds a table from a configured regime.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::InvalidLabel` for a malformed label, or any
    /// error of [`CategoryTable::new`].
    pub fn from_config(regime: &RegimeConfig) -> Result<Self, CategoryError> {
        let thresholds = regime
            .categories
            .iter()
            .map(|entry| Ok(CategoryThreshold::new(entry.label.parse()?, entry.ceiling)))
            .collect::<Result<Vec<_>, CategoryError>>()?;
        Self::new(thresholds)
    }

    /// Iterates thresholds by ascending ceiling. Cheap to clone and restart.
    pub fn sorted_ascending(&self) -> std::slice::Iter<'_, CategoryThreshold> {
        self.thresholds.iter()
    }

    /// Ceiling of `label`, if present.
    #[must_use]
    pub fn ceiling_of(&self, label: CategoryLabel) -> Option<Decimal> {
        self.sorted_ascending()
            .find(|t| t.label == label)
            .map(|t| t.ceiling)
    }

    /// Index of `label` in ascending order, if present.
    #[must_use]
    pub fn position_of(&self, label: CategoryLabel) -> Option<usize> {
        self.sorted_ascending().position(|t| t.label == label)
    }

    /// Threshold at `index` in ascending order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CategoryThreshold> {
        self.thresholds.get(index)
    }

    /// Threshold with the highest ceiling.
    #[must_use]
    pub fn highest(&self) -> &CategoryThreshold {
        &self.thresholds[self.thresholds.len() - 1]
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// True when the table has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// All thresholds by ascending ceiling.
    #[must_use]
    pub fn as_slice(&self) -> &[CategoryThreshold] {
        &self.thresholds
    }
}
