use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal bracket of a progressive rate schedule.
///
/// Covers the half-open income range `[lower_bound, upper_bound)`. The final
/// bracket of a schedule has `upper_bound` set to `None` (unbounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub tax_rate: Decimal,
}
