//! Bracket search, excess and headroom.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::CategoryError;
use super::table::{CategoryLabel, CategoryTable, CategoryThreshold};
use super::types::{Bracket, CategoryMode, Classification, ComplianceStatus};

/// Classifies cumulative revenue against a [`CategoryTable`].
///
/// Out-of-range amounts are not errors: they classify as
/// [`Bracket::AboveRegime`].
#[derive(Debug, Clone, Copy)]
pub struct CategoryClassifier<'a> {
    table: &'a CategoryTable,
}

impl<'a> CategoryClassifier<'a> {
    /// Creates a classifier over `table`.
    #[must_use]
    pub const fn new(table: &'a CategoryTable) -> Self {
        Self { table }
    }

    /// The table being classified against.
    #[must_use]
    pub const fn table(&self) -> &'a CategoryTable {
        self.table
    }

    /// Smallest bracket whose ceiling is at or above `amount`.
    ///
    /// An amount equal to a ceiling belongs to that bracket.
    #[must_use]
    pub fn bracket_for(&self, amount: Decimal) -> Bracket {
        self.table
            .sorted_ascending()
            .enumerate()
            .find(|(_, threshold)| threshold.ceiling >= amount)
            .map_or(Bracket::AboveRegime, |(index, threshold)| Bracket::Within {
                index,
                threshold: *threshold,
            })
    }

    /// Excess and headroom of `amount` against the declared category.
    ///
    /// Both are zero when `amount` equals the ceiling.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::UnknownCategory` if `declared` is not in the
    /// table.
    pub fn excess_and_headroom(
        &self,
        amount: Decimal,
        declared: CategoryLabel,
    ) -> Result<(Decimal, Decimal), CategoryError> {
        let ceiling = self
            .table
            .ceiling_of(declared)
            .ok_or(CategoryError::UnknownCategory(declared.as_char()))?;
        Ok(Self::split(amount, ceiling))
    }

    /// `(max(0, amount - ceiling), max(0, ceiling - amount))`.
    #[must_use]
    pub fn split(amount: Decimal, ceiling: Decimal) -> (Decimal, Decimal) {
        let excess = (amount - ceiling).max(Decimal::ZERO);
        let headroom = (ceiling - amount).max(Decimal::ZERO);
        (excess, headroom)
    }

    /// Thresholds worth displaying for `max_amount`: every bracket up to
    /// the one containing it, plus the next one up. The full table when
    /// `max_amount` is above the regime.
    #[must_use]
    pub fn relevant_category_subset(&self, max_amount: Decimal) -> &'a [CategoryThreshold] {
        let all = self.table.as_slice();
        match self.bracket_for(max_amount).index() {
            Some(index) => &all[..(index + 2).min(all.len())],
            None => all,
        }
    }

    /// Classifies `amount` in the given mode.
    ///
    /// In declared mode the next eligible category is the bracket the
    /// amount now falls into when the declared ceiling is exceeded, or the
    /// category right above the declared one otherwise. In observed mode it
    /// is the category right above the containing bracket.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::UnknownCategory` for a declared category that
    /// is not in the table.
    pub fn classify(
        &self,
        amount: Decimal,
        mode: CategoryMode,
    ) -> Result<Classification, CategoryError> {
        let bracket = self.bracket_for(amount);

        let (current_category, current_ceiling, next_eligible_category) = match mode {
            CategoryMode::Declared(label) => {
                let index = self
                    .table
                    .position_of(label)
                    .ok_or(CategoryError::UnknownCategory(label.as_char()))?;
                let ceiling = self.table.as_slice()[index].ceiling;
                let next = if amount > ceiling {
                    bracket.label()
                } else {
                    self.label_at(index + 1)
                };
                (Some(label), ceiling, next)
            }
            CategoryMode::Observed => match bracket {
                Bracket::Within { index, threshold } => (
                    Some(threshold.label),
                    threshold.ceiling,
                    self.label_at(index + 1),
                ),
                Bracket::AboveRegime => (None, self.table.highest().ceiling, None),
            },
        };

        let (excess_amount, headroom_amount) = Self::split(amount, current_ceiling);
        let status = if bracket.is_above_regime() {
            ComplianceStatus::AboveRegime
        } else if excess_amount > Decimal::ZERO {
            ComplianceStatus::Exceeded
        } else if headroom_amount.is_zero() {
            ComplianceStatus::AtCeiling
        } else {
            ComplianceStatus::Within
        };

        if status.is_compliant() {
            debug!(
                amount = %amount,
                category = ?current_category,
                headroom = %headroom_amount,
                "revenue within category"
            );
        } else {
            warn!(
                amount = %amount,
                category = ?current_category,
                excess = %excess_amount,
                next = ?next_eligible_category,
                "revenue exceeds category ceiling"
            );
        }

        Ok(Classification {
            mode,
            assessed_amount: amount,
            bracket,
            current_category,
            current_ceiling,
            next_eligible_category,
            excess_amount,
            headroom_amount,
            status,
        })
    }

    fn label_at(&self, index: usize) -> Option<CategoryLabel> {
        self.table.get(index).map(|t| t.label)
    }
}
