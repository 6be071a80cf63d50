//! Progressive income tax over a marginal bracket schedule.
//!
//! Each bracket taxes only the slice of income falling within its range; the
//! top marginal rate never applies to the whole amount. At a bracket
//! boundary the income is fully covered by the lower brackets, so no amount
//! is counted twice.

use rust_decimal::Decimal;

use crate::TaxBracket;
use crate::calculations::common::round_half_up;

/// Marginal-sum calculator over a validated bracket table.
///
/// Borrows the brackets from a [`crate::TaxYearPolicy`] that has already
/// passed [`crate::TaxYearPolicy::validate`]: ascending, contiguous from
/// zero, final bracket unbounded.
#[derive(Debug, Clone)]
pub struct BracketSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketSchedule<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Computes the tax on `taxable_income`, rounded to cents once after the
    /// marginal sum.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxpal_core::calculations::BracketSchedule;
    /// use taxpal_core::policy;
    ///
    /// let policy = policy::for_year(2026).unwrap();
    /// let schedule = BracketSchedule::new(&policy.brackets);
    ///
    /// // 11925 x 10% + (30000 - 11925) x 12%
    /// assert_eq!(schedule.tax_for(dec!(30000.00)), dec!(3361.50));
    /// ```
    pub fn tax_for(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        for bracket in self.brackets {
            if taxable_income <= bracket.lower_bound {
                break;
            }
            let slice_top = match bracket.upper_bound {
                Some(upper) => taxable_income.min(upper),
                None => taxable_income,
            };
            tax += (slice_top - bracket.lower_bound) * bracket.tax_rate;
        }

        round_half_up(tax)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn single_filer_2026() -> Vec<TaxBracket> {
        vec![
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
                upper_bound: Some(dec!(103350)),
                tax_rate: dec!(0.22),
            },
            TaxBracket {
                lower_bound: dec!(103350),
                upper_bound: Some(dec!(197300)),
                tax_rate: dec!(0.24),
            },
            TaxBracket {
                lower_bound: dec!(197300),
                upper_bound: Some(dec!(250525)),
                tax_rate: dec!(0.32),
            },
            TaxBracket {
                lower_bound: dec!(250525),
                upper_bound: Some(dec!(626350)),
                tax_rate: dec!(0.35),
            },
            TaxBracket {
                lower_bound: dec!(626350),
                upper_bound: None,
                tax_rate: dec!(0.37),
            },
        ]
    }

    #[test]
    fn tax_for_zero_income_is_zero() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        assert_eq!(schedule.tax_for(dec!(0.00)), dec!(0.00));
    }

    #[test]
    fn tax_for_negative_income_is_zero() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        assert_eq!(schedule.tax_for(dec!(-5000.00)), dec!(0.00));
    }

    #[test]
    fn tax_for_income_within_first_bracket() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        assert_eq!(schedule.tax_for(dec!(10000.00)), dec!(1000.00));
    }

    #[test]
    fn tax_for_income_spanning_two_brackets() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        // 1192.50 + (30000 - 11925) * 0.12 = 1192.50 + 2169.00
        assert_eq!(schedule.tax_for(dec!(30000.00)), dec!(3361.50));
    }

    #[test]
    fn tax_for_income_spanning_three_brackets() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        // 1192.50 + 4386.00 + (85000 - 48475) * 0.22 = 13614.00
        assert_eq!(schedule.tax_for(dec!(85000.00)), dec!(13614.00));
    }

    #[test]
    fn tax_for_income_in_top_bracket() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        // full lower brackets sum to 188769.75, then 37% on the rest
        assert_eq!(schedule.tax_for(dec!(700000.00)), dec!(216020.25));
    }

    #[test]
    fn tax_at_bracket_boundary_uses_only_lower_brackets() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        // exactly at the 10%/12% boundary: the 12% bracket contributes nothing
        assert_eq!(schedule.tax_for(dec!(11925.00)), dec!(1192.50));
    }

    #[test]
    fn tax_one_cent_above_boundary_adds_marginal_rate_only() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        // 1192.50 + 0.01 * 0.12 = 1192.5012 -> 1192.50
        assert_eq!(schedule.tax_for(dec!(11925.01)), dec!(1192.50));
    }

    #[test]
    fn tax_is_monotonic_in_income() {
        let brackets = single_filer_2026();
        let schedule = BracketSchedule::new(&brackets);

        let incomes = [
            dec!(0),
            dec!(5000),
            dec!(11925),
            dec!(30000),
            dec!(48475),
            dec!(103350),
            dec!(250525),
            dec!(700000),
        ];
        let mut previous = Decimal::ZERO;
        for income in incomes {
            let tax = schedule.tax_for(income);
            assert!(tax >= previous, "tax decreased at income {income}");
            previous = tax;
        }
    }
}
