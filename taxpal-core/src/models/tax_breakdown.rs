use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complete result of one estimation.
///
/// Every intermediate line is carried for transparency, so a caller can
/// render the full worksheet rather than just the totals. All values are
/// derived and immutable; the engine recomputes a fresh breakdown on every
/// call and never caches or persists one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Gross income after input normalization.
    pub gross_income: Decimal,

    /// Deductible business expenses after input normalization.
    pub deductible_expenses: Decimal,

    /// Net self-employment income: max(0, gross - expenses).
    pub net_income: Decimal,

    /// Portion of net income subject to SE tax (net income x 92.35%).
    pub se_taxable_base: Decimal,

    /// Self-employment tax (SE base x 15.3%).
    pub self_employment_tax: Decimal,

    /// Deductible employer-equivalent half of SE tax.
    pub half_se_deduction: Decimal,

    /// Qualified business income deduction (net income x 20%, no phase-out).
    pub qbi_deduction: Decimal,

    /// Adjusted gross income: net income minus the half-SE deduction.
    pub adjusted_gross_income: Decimal,

    /// Taxable income after the standard and QBI deductions, floored at zero.
    pub taxable_income: Decimal,

    /// Federal income tax from the progressive bracket schedule.
    pub federal_income_tax: Decimal,

    /// Total liability: federal income tax + SE tax.
    pub total_tax: Decimal,

    /// One of four equal estimated payment installments.
    pub quarterly_payment: Decimal,

    /// Total tax as a fraction of net income (0 when net income is 0).
    pub effective_rate: Decimal,

    /// Net income minus total tax. Returned signed; presentation layers
    /// decide whether to clamp at zero.
    pub take_home: Decimal,
}
