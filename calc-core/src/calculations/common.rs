//! Rounding helpers shared by the single-operand transforms.
//!
//! Every fixed-point result the calculator shows is rounded half away from
//! zero, on the shortest decimal text of the `f64` rather than its exact
//! binary value. `1.005` therefore rounds to `1.01`, the way a person
//! reading the display would expect.

use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a finite `f64` into a [`Decimal`] through its shortest
/// round-trip text.
///
/// Returns `None` for non-finite values and for magnitudes `Decimal` cannot
/// hold.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::to_decimal;
///
/// assert_eq!(to_decimal(0.1 + 0.2), Some(dec!(0.30000000000000004)));
/// assert_eq!(to_decimal(f64::INFINITY), None);
/// ```
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse().ok()
}

/// Rounds to exactly `dp` fractional digits, ties away from zero.
///
/// The result always carries scale `dp`, so `110` rounded to two places
/// prints as `110.00`. A result of zero never carries a minus sign.
/// Returns `None` when the value has too many integer digits to keep `dp`
/// fractional digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_half_away_from_zero;
///
/// assert_eq!(round_half_away_from_zero(dec!(2.5), 0), Some(dec!(3)));
/// assert_eq!(round_half_away_from_zero(dec!(-2.5), 0), Some(dec!(-3)));
/// assert_eq!(round_half_away_from_zero(dec!(110), 2).unwrap().to_string(), "110.00");
/// ```
pub fn round_half_away_from_zero(
    value: Decimal,
    dp: u32,
) -> Option<Decimal> {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // rescale caps the scale silently once the mantissa would overflow.
    rounded.rescale(dp);
    if rounded.scale() != dp {
        return None;
    }
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}
