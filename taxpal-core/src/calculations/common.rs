//! Shared helpers for currency arithmetic.

use rust_decimal::Decimal;

/// Rounds a currency amount to cents using half-up (away from zero) rounding.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxpal_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(4238.865)), dec!(4238.87));
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a rate (a fraction, not a currency amount) to four decimal places.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a value at zero.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
