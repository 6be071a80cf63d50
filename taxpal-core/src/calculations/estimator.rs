//! Self-employment tax estimation for freelancers.
//!
//! This module implements the estimation pipeline that converts gross income
//! and deductible business expenses into a full tax breakdown for a single
//! filer, under a simplified model of U.S. self-employment taxation.
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Net SE income: max(0, gross income - deductible expenses) |
//! | 2    | SE taxable base: net income x SE income factor (92.35%) |
//! | 3    | SE tax: SE base x SE tax rate (15.3%) |
//! | 4    | Half-SE deduction: SE tax x 50% |
//! | 5    | QBI deduction: net income x QBI rate (20%) |
//! | 6    | AGI: net income - half-SE deduction |
//! | 7    | Taxable income: max(0, AGI - standard deduction - QBI deduction) |
//! | 8    | Federal income tax via the marginal bracket schedule |
//! | 9    | Total tax: income tax + SE tax |
//! | 10   | Quarterly payment: total tax / 4 |
//! | 11   | Effective rate: total tax / net income (0 if no net income) |
//! | 12   | Take-home: net income - total tax |
//!
//! Each currency line is rounded to cents half-up as it is computed.
//!
//! # Input policy
//!
//! Inputs are normalized, never rejected: negative amounts clamp to zero (see
//! [`TaxInput::new`]). The clamp is logged at `warn` level. This is the single
//! input policy for every entry point, so estimation itself cannot fail; the
//! only fallible step is policy validation at construction.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxpal_core::calculations::TaxEstimator;
//! use taxpal_core::policy;
//!
//! let estimator = TaxEstimator::new(policy::for_year(2026).unwrap()).unwrap();
//! let breakdown = estimator.estimate(dec!(75000.00), dec!(15000.00));
//!
//! assert_eq!(breakdown.net_income, dec!(60000.00));
//! assert_eq!(breakdown.self_employment_tax, dec!(8477.73));
//! assert_eq!(breakdown.total_tax, dec!(11606.57));
//! assert_eq!(breakdown.quarterly_payment, dec!(2901.64));
//! ```

use rust_decimal::Decimal;

use crate::calculations::bracket_schedule::BracketSchedule;
use crate::calculations::common::{clamp_non_negative, round_half_up, round_rate};
use crate::calculations::payments::{ScheduledPayment, payment_schedule};
use crate::models::{DeductionEntry, PolicyError, TaxBreakdown, TaxInput, TaxYearPolicy};

/// Stateless estimator for one tax year's policy.
///
/// Holds a validated [`TaxYearPolicy`] and derives a fresh [`TaxBreakdown`]
/// on every call. There is no shared mutable state and no I/O; a single
/// estimator can be used from any number of callers concurrently.
#[derive(Debug, Clone)]
pub struct TaxEstimator {
    policy: TaxYearPolicy,
}

impl TaxEstimator {
    /// Creates an estimator, validating the policy once up front.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if the policy's rates are out of range or its
    /// bracket table does not cover `[0, +inf)` contiguously.
    pub fn new(policy: TaxYearPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy this estimator was built with.
    pub fn policy(&self) -> &TaxYearPolicy {
        &self.policy
    }

    /// Estimates the tax breakdown for the given gross income and deductible
    /// expenses.
    ///
    /// Never fails: inputs are normalized per the permissive input policy and
    /// the policy was validated at construction. Calling twice with the same
    /// inputs yields an identical breakdown.
    pub fn estimate(
        &self,
        gross_income: Decimal,
        deductible_expenses: Decimal,
    ) -> TaxBreakdown {
        self.estimate_input(TaxInput::new(gross_income, deductible_expenses))
    }

    /// Estimates with a set of itemized deduction records on top of the flat
    /// expense total.
    ///
    /// The deductible portion of each entry (category default or explicit
    /// percentage) is added to `deductible_expenses` before the pipeline
    /// runs, the same way the deduction tracker feeds the calculator.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxpal_core::calculations::TaxEstimator;
    /// use taxpal_core::{DeductionCategory, DeductionEntry, policy};
    ///
    /// let estimator = TaxEstimator::new(policy::for_year(2026).unwrap()).unwrap();
    /// let entries = vec![DeductionEntry {
    ///     category: DeductionCategory::SoftwareTools,
    ///     description: "IDE subscription".to_string(),
    ///     amount: dec!(500.00),
    ///     deduction_percent: None,
    /// }];
    ///
    /// let breakdown = estimator.estimate_with_deductions(dec!(75000.00), dec!(14500.00), &entries);
    ///
    /// assert_eq!(breakdown.deductible_expenses, dec!(15000.00));
    /// ```
    pub fn estimate_with_deductions(
        &self,
        gross_income: Decimal,
        deductible_expenses: Decimal,
        deductions: &[DeductionEntry],
    ) -> TaxBreakdown {
        let itemized = DeductionEntry::total_deductible(deductions);
        self.estimate(gross_income, deductible_expenses + itemized)
    }

    /// Expands a breakdown's quarterly payment into the four dated
    /// installments for this policy's tax year.
    pub fn payment_schedule(
        &self,
        breakdown: &TaxBreakdown,
    ) -> [ScheduledPayment; 4] {
        payment_schedule(&self.policy, breakdown.quarterly_payment)
    }

    fn estimate_input(
        &self,
        input: TaxInput,
    ) -> TaxBreakdown {
        // Step 1: net SE income
        let net_income = self.net_income(&input);

        // Steps 2-4: self-employment tax and its deductible half
        let se_taxable_base = self.se_taxable_base(net_income);
        let self_employment_tax = self.se_tax(se_taxable_base);
        let half_se_deduction = self.half_se_deduction(self_employment_tax);

        // Steps 5-7: deductions down to taxable income
        let qbi_deduction = self.qbi_deduction(net_income);
        let adjusted_gross_income = self.adjusted_gross_income(net_income, half_se_deduction);
        let taxable_income = self.taxable_income(adjusted_gross_income, qbi_deduction);

        // Step 8: progressive income tax
        let federal_income_tax =
            BracketSchedule::new(&self.policy.brackets).tax_for(taxable_income);

        // Steps 9-12: aggregation
        let total_tax = round_half_up(federal_income_tax + self_employment_tax);
        let quarterly_payment = self.quarterly_payment(total_tax);
        let effective_rate = self.effective_rate(total_tax, net_income);
        let take_home = round_half_up(net_income - total_tax);

        TaxBreakdown {
            gross_income: input.gross_income,
            deductible_expenses: input.deductible_expenses,
            net_income,
            se_taxable_base,
            self_employment_tax,
            half_se_deduction,
            qbi_deduction,
            adjusted_gross_income,
            taxable_income,
            federal_income_tax,
            total_tax,
            quarterly_payment,
            effective_rate,
            take_home,
        }
    }

    /// Net self-employment income: expenses subtracted from gross, floored
    /// at zero. Expenses larger than income never produce a negative base.
    fn net_income(
        &self,
        input: &TaxInput,
    ) -> Decimal {
        clamp_non_negative(round_half_up(
            input.gross_income - input.deductible_expenses,
        ))
    }

    /// Portion of net income subject to SE tax (the statutory
    /// employer-equivalent reduction leaves 92.35%).
    fn se_taxable_base(
        &self,
        net_income: Decimal,
    ) -> Decimal {
        round_half_up(net_income * self.policy.se_income_factor)
    }

    /// Self-employment tax on the taxable base.
    fn se_tax(
        &self,
        se_taxable_base: Decimal,
    ) -> Decimal {
        round_half_up(se_taxable_base * self.policy.se_tax_rate)
    }

    /// Deductible employer-equivalent half of SE tax.
    fn half_se_deduction(
        &self,
        se_tax: Decimal,
    ) -> Decimal {
        round_half_up(se_tax / Decimal::TWO)
    }

    /// Qualified business income deduction. No income-based phase-out is
    /// modeled; the flat rate applies at every income level.
    fn qbi_deduction(
        &self,
        net_income: Decimal,
    ) -> Decimal {
        round_half_up(net_income * self.policy.qbi_deduction_rate)
    }

    /// Adjusted gross income: net income less the half-SE deduction.
    fn adjusted_gross_income(
        &self,
        net_income: Decimal,
        half_se_deduction: Decimal,
    ) -> Decimal {
        round_half_up(net_income - half_se_deduction)
    }

    /// Taxable income after the standard and QBI deductions, floored at zero.
    fn taxable_income(
        &self,
        adjusted_gross_income: Decimal,
        qbi_deduction: Decimal,
    ) -> Decimal {
        clamp_non_negative(round_half_up(
            adjusted_gross_income - self.policy.standard_deduction - qbi_deduction,
        ))
    }

    /// One of four equal installments of the annual liability.
    fn quarterly_payment(
        &self,
        total_tax: Decimal,
    ) -> Decimal {
        round_half_up(total_tax / Decimal::from(4))
    }

    /// Total tax as a fraction of net income, zero when there is no net
    /// income.
    fn effective_rate(
        &self,
        total_tax: Decimal,
        net_income: Decimal,
    ) -> Decimal {
        if net_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_rate(total_tax / net_income)
    }
}
