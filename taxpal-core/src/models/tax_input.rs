use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Input to a single estimation request.
///
/// Constructed fresh per calculation; carries no identity. Construction
/// normalizes the amounts under the engine's permissive input policy:
/// negative values are clamped to zero rather than rejected, and the clamp is
/// logged at `warn` level so callers can surface the normalization. `Decimal`
/// has no NaN or infinity, so non-finite amounts cannot be represented at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub gross_income: Decimal,
    pub deductible_expenses: Decimal,
}

impl TaxInput {
    /// Builds an input pair, clamping negative amounts to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxpal_core::TaxInput;
    ///
    /// let input = TaxInput::new(dec!(75000.00), dec!(-500.00));
    ///
    /// assert_eq!(input.gross_income, dec!(75000.00));
    /// assert_eq!(input.deductible_expenses, dec!(0.00));
    /// ```
    pub fn new(
        gross_income: Decimal,
        deductible_expenses: Decimal,
    ) -> Self {
        if gross_income < Decimal::ZERO {
            warn!(
                gross_income = %gross_income,
                "Negative gross income clamped to zero"
            );
        }
        if deductible_expenses < Decimal::ZERO {
            warn!(
                deductible_expenses = %deductible_expenses,
                "Negative deductible expenses clamped to zero"
            );
        }
        Self {
            gross_income: gross_income.max(Decimal::ZERO),
            deductible_expenses: deductible_expenses.max(Decimal::ZERO),
        }
    }
}
