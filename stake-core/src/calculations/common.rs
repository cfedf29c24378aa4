//! Rounding helpers shared by the estimator.
//!
//! All rounding here is half away from zero, so `2.5` becomes `3` and
//! `-2.5` becomes `-3`.

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use stake_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.044), 2), dec!(2.04));
/// assert_eq!(round_half_up(dec!(2.045), 2), dec!(2.05));
/// assert_eq!(round_half_up(dec!(-2.045), 2), dec!(-2.05)); // Away from zero
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a float to the nearest whole unit.
///
/// Values outside the `i64` range saturate at its bounds.
///
/// # Examples
///
/// ```
/// use stake_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(89.5), 90);
/// assert_eq!(round_whole(-89.5), -90);
/// assert_eq!(round_whole(-0.2), 0);
/// ```
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Converts sampled odds into a decimal rounded to two places.
///
/// Non-finite input maps to zero.
pub fn odds_to_decimal(odds: f64) -> Decimal {
    Decimal::from_f64(odds)
        .map(|d| round_half_up(d, 2))
        .unwrap_or_default()
}
