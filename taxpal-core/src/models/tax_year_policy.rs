use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors describing a malformed [`TaxYearPolicy`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The self-employment tax rate must be between 0 and 1.
    #[error("self-employment tax rate must be between 0 and 1, got {0}")]
    InvalidSeTaxRate(Decimal),

    /// The SE income factor must be between 0 and 1 (exclusive of 0).
    #[error("SE income factor must be between 0 and 1, got {0}")]
    InvalidSeIncomeFactor(Decimal),

    /// The QBI deduction rate must be between 0 and 1.
    #[error("QBI deduction rate must be between 0 and 1, got {0}")]
    InvalidQbiRate(Decimal),

    /// The standard deduction must be non-negative.
    #[error("standard deduction must be non-negative, got {0}")]
    NegativeStandardDeduction(Decimal),

    /// The bracket table must contain at least one bracket.
    #[error("bracket table is empty")]
    EmptyBracketTable,

    /// The first bracket must start at zero.
    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotZero(Decimal),

    /// A bracket's upper bound must exceed its lower bound.
    #[error("bracket starting at {lower} has upper bound {upper}")]
    InvertedBracket { lower: Decimal, upper: Decimal },

    /// Each bracket must start exactly where the previous one ended.
    #[error("bracket table is not contiguous: expected lower bound {expected}, got {found}")]
    BracketGap { expected: Decimal, found: Decimal },

    /// Only the final bracket may be unbounded.
    #[error("bracket {0} is unbounded but is not the final bracket")]
    UnboundedBracketBeforeEnd(usize),

    /// The final bracket must be unbounded so the table covers all income.
    #[error("final bracket must have no upper bound")]
    MissingUnboundedBracket,

    /// Every bracket rate must be between 0 and 1.
    #[error("bracket tax rate must be between 0 and 1, got {0}")]
    InvalidBracketRate(Decimal),
}

/// Policy parameters for one tax year.
///
/// These are the values that change annually (rates, the standard deduction,
/// the bracket schedule, payment due dates). The estimator receives a policy
/// as a parameter rather than embedding any of these, so the same engine can
/// be exercised against any tax year. Built-in tables live in
/// [`crate::policy`].
///
/// # Example
///
/// ```
/// use taxpal_core::policy;
///
/// let policy = policy::for_year(2026).unwrap();
/// assert_eq!(policy.validate(), Ok(()));
/// assert_eq!(policy.brackets.len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearPolicy {
    /// The tax year these parameters apply to.
    pub tax_year: i32,

    /// Combined self-employment tax rate (social security + Medicare),
    /// typically 15.3%.
    pub se_tax_rate: Decimal,

    /// Fraction of net SE income subject to SE tax, typically 92.35%
    /// (mirrors the statutory 7.65% employer-equivalent reduction).
    pub se_income_factor: Decimal,

    /// Qualified business income deduction rate, typically 20%.
    /// No income-based phase-out is modeled.
    pub qbi_deduction_rate: Decimal,

    /// Standard deduction for a single filer.
    pub standard_deduction: Decimal,

    /// Progressive rate schedule, ascending and contiguous from zero.
    /// The final bracket must be unbounded.
    pub brackets: Vec<TaxBracket>,

    /// Statutory due dates for the four estimated payments, Q1 through Q4.
    pub payment_due_dates: [NaiveDate; 4],
}

impl TaxYearPolicy {
    /// Validates the policy values.
    ///
    /// Checks that every rate and factor is within its valid range and that
    /// the bracket table is ascending, contiguous from zero, and terminated
    /// by an unbounded bracket, so the schedule covers `[0, +inf)` with no
    /// gaps or overlaps.
    ///
    /// # Errors
    ///
    /// Returns the [`PolicyError`] describing the first defect found.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.se_tax_rate < Decimal::ZERO || self.se_tax_rate > Decimal::ONE {
            return Err(PolicyError::InvalidSeTaxRate(self.se_tax_rate));
        }
        if self.se_income_factor <= Decimal::ZERO || self.se_income_factor > Decimal::ONE {
            return Err(PolicyError::InvalidSeIncomeFactor(self.se_income_factor));
        }
        if self.qbi_deduction_rate < Decimal::ZERO || self.qbi_deduction_rate > Decimal::ONE {
            return Err(PolicyError::InvalidQbiRate(self.qbi_deduction_rate));
        }
        if self.standard_deduction < Decimal::ZERO {
            return Err(PolicyError::NegativeStandardDeduction(
                self.standard_deduction,
            ));
        }
        self.validate_brackets()
    }

    fn validate_brackets(&self) -> Result<(), PolicyError> {
        if self.brackets.is_empty() {
            return Err(PolicyError::EmptyBracketTable);
        }

        let mut expected_lower = Decimal::ZERO;
        let last_index = self.brackets.len() - 1;

        for (index, bracket) in self.brackets.iter().enumerate() {
            if index == 0 && bracket.lower_bound != Decimal::ZERO {
                return Err(PolicyError::FirstBracketNotZero(bracket.lower_bound));
            }
            if bracket.lower_bound != expected_lower {
                return Err(PolicyError::BracketGap {
                    expected: expected_lower,
                    found: bracket.lower_bound,
                });
            }
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(PolicyError::InvalidBracketRate(bracket.tax_rate));
            }

            match bracket.upper_bound {
                Some(upper) => {
                    if upper <= bracket.lower_bound {
                        return Err(PolicyError::InvertedBracket {
                            lower: bracket.lower_bound,
                            upper,
                        });
                    }
                    if index == last_index {
                        return Err(PolicyError::MissingUnboundedBracket);
                    }
                    expected_lower = upper;
                }
                None => {
                    if index != last_index {
                        return Err(PolicyError::UnboundedBracketBeforeEnd(index));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn due_dates() -> [NaiveDate; 4] {
        [
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 16).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            NaiveDate::from_ymd_opt(2027, 1, 15).unwrap(),
        ]
    }

    fn test_policy() -> TaxYearPolicy {
        TaxYearPolicy {
            tax_year: 2026,
            se_tax_rate: dec!(0.153),
            se_income_factor: dec!(0.9235),
            qbi_deduction_rate: dec!(0.20),
            standard_deduction: dec!(15700.00),
            brackets: vec![
                TaxBracket {
                    lower_bound: dec!(0),
                    upper_bound: Some(dec!(11925)),
                    tax_rate: dec!(0.10),
                },
                TaxBracket {
                    lower_bound: dec!(11925),
                    upper_bound: Some(dec!(48475)),
                    tax_rate: dec!(0.12),
                },
                TaxBracket {
                    lower_bound: dec!(48475),
                    upper_bound: None,
                    tax_rate: dec!(0.22),
                },
            ],
            payment_due_dates: due_dates(),
        }
    }

    // =========================================================================
    // rate and factor validation tests
    // =========================================================================

    #[test]
    fn validate_accepts_valid_policy() {
        let policy = test_policy();

        let result = policy.validate();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn validate_rejects_negative_se_tax_rate() {
        let policy = TaxYearPolicy {
            se_tax_rate: dec!(-0.1),
            ..test_policy()
        };

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::InvalidSeTaxRate(dec!(-0.1))));
    }

    #[test]
    fn validate_rejects_se_tax_rate_greater_than_one() {
        let policy = TaxYearPolicy {
            se_tax_rate: dec!(1.53),
            ..test_policy()
        };

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::InvalidSeTaxRate(dec!(1.53))));
    }

    #[test]
    fn validate_rejects_zero_se_income_factor() {
        let policy = TaxYearPolicy {
            se_income_factor: dec!(0.00),
            ..test_policy()
        };

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::InvalidSeIncomeFactor(dec!(0.00))));
    }

    #[test]
    fn validate_rejects_qbi_rate_greater_than_one() {
        let policy = TaxYearPolicy {
            qbi_deduction_rate: dec!(1.20),
            ..test_policy()
        };

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::InvalidQbiRate(dec!(1.20))));
    }

    #[test]
    fn validate_rejects_negative_standard_deduction() {
        let policy = TaxYearPolicy {
            standard_deduction: dec!(-100.00),
            ..test_policy()
        };

        let result = policy.validate();

        assert_eq!(
            result,
            Err(PolicyError::NegativeStandardDeduction(dec!(-100.00)))
        );
    }

    // =========================================================================
    // bracket table validation tests
    // =========================================================================

    #[test]
    fn validate_rejects_empty_bracket_table() {
        let policy = TaxYearPolicy {
            brackets: vec![],
            ..test_policy()
        };

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::EmptyBracketTable));
    }

    #[test]
    fn validate_rejects_first_bracket_not_starting_at_zero() {
        let mut policy = test_policy();
        policy.brackets[0].lower_bound = dec!(100);

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::FirstBracketNotZero(dec!(100))));
    }

    #[test]
    fn validate_rejects_gap_between_brackets() {
        let mut policy = test_policy();
        policy.brackets[1].lower_bound = dec!(12000);

        let result = policy.validate();

        assert_eq!(
            result,
            Err(PolicyError::BracketGap {
                expected: dec!(11925),
                found: dec!(12000),
            })
        );
    }

    #[test]
    fn validate_rejects_overlapping_brackets() {
        let mut policy = test_policy();
        policy.brackets[1].lower_bound = dec!(11000);

        let result = policy.validate();

        assert_eq!(
            result,
            Err(PolicyError::BracketGap {
                expected: dec!(11925),
                found: dec!(11000),
            })
        );
    }

    #[test]
    fn validate_rejects_inverted_bracket() {
        let mut policy = test_policy();
        policy.brackets[0].upper_bound = Some(dec!(0));

        let result = policy.validate();

        assert_eq!(
            result,
            Err(PolicyError::InvertedBracket {
                lower: dec!(0),
                upper: dec!(0),
            })
        );
    }

    #[test]
    fn validate_rejects_bounded_final_bracket() {
        let mut policy = test_policy();
        policy.brackets[2].upper_bound = Some(dec!(100000));

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::MissingUnboundedBracket));
    }

    #[test]
    fn validate_rejects_unbounded_bracket_before_end() {
        let mut policy = test_policy();
        policy.brackets[1].upper_bound = None;

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::UnboundedBracketBeforeEnd(1)));
    }

    #[test]
    fn validate_rejects_bracket_rate_greater_than_one() {
        let mut policy = test_policy();
        policy.brackets[1].tax_rate = dec!(1.12);

        let result = policy.validate();

        assert_eq!(result, Err(PolicyError::InvalidBracketRate(dec!(1.12))));
    }
}
