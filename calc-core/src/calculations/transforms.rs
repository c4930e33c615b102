//! Single-operand transforms applied to the current entry.
//!
//! Both return `None` when the entry does not start with a number; the
//! caller leaves its state untouched in that case.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::common::{round_half_away_from_zero, to_decimal};
use super::number::{format_number, parse_operand};

/// Multiplies `text` by `rate` and formats the product with exactly two
/// fractional digits.
///
/// The multiplication is exact in [`Decimal`]; products `Decimal` cannot
/// hold with two fractional digits fall back to `f64` arithmetic.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::surcharge;
///
/// assert_eq!(surcharge("100", dec!(1.10)).as_deref(), Some("110.00"));
/// assert_eq!(surcharge("abc", dec!(1.10)), None);
/// ```
pub fn surcharge(
    text: &str,
    rate: Decimal,
) -> Option<String> {
    let value = parse_operand(text).ok()?;

    let rounded = to_decimal(value)
        .and_then(|d| d.checked_mul(rate))
        .and_then(|product| round_half_away_from_zero(product, 2));
    if let Some(rounded) = rounded {
        return Some(rounded.to_string());
    }

    let product = value * rate.to_f64()?;
    if product.is_finite() {
        Some(format!("{product:.2}"))
    } else {
        Some(format_number(product))
    }
}

/// Rounds `text` to the nearest integer, ties away from zero.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::round_to_integer;
///
/// assert_eq!(round_to_integer("2.5").as_deref(), Some("3"));
/// assert_eq!(round_to_integer("2.4").as_deref(), Some("2"));
/// ```
pub fn round_to_integer(text: &str) -> Option<String> {
    let value = parse_operand(text).ok()?;

    match to_decimal(value).and_then(|d| round_half_away_from_zero(d, 0)) {
        Some(rounded) => Some(rounded.to_string()),
        None => Some(format_number(value.round())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // surcharge tests
    // =========================================================================

    #[test]
    fn surcharge_adds_ten_percent() {
        assert_eq!(surcharge("100", dec!(1.10)).as_deref(), Some("110.00"));
    }

    #[test]
    fn surcharge_rounds_midpoint_away_from_zero() {
        // 0.05 * 1.10 = 0.055
        assert_eq!(surcharge("0.05", dec!(1.10)).as_deref(), Some("0.06"));
        assert_eq!(surcharge("-0.05", dec!(1.10)).as_deref(), Some("-0.06"));
    }

    #[test]
    fn surcharge_honours_custom_rate() {
        assert_eq!(surcharge("250", dec!(1.08)).as_deref(), Some("270.00"));
    }

    #[test]
    fn surcharge_reads_numeric_prefix() {
        assert_eq!(surcharge("10abc", dec!(1.10)).as_deref(), Some("11.00"));
    }

    #[test]
    fn surcharge_ignores_non_numeric_entry() {
        assert_eq!(surcharge("Error", dec!(1.10)), None);
        assert_eq!(surcharge("", dec!(1.10)), None);
    }

    #[test]
    fn surcharge_keeps_two_decimals_near_decimal_capacity() {
        for input in ["1e26", "1e27", "5e28", "70000000000000000000000000000"] {
            let text = surcharge(input, dec!(1.10)).unwrap();
            let (_, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

            assert_eq!(fraction.len(), 2, "{input} -> {text}");
        }
    }

    #[test]
    fn surcharge_falls_back_for_huge_values() {
        assert_eq!(surcharge("Infinity", dec!(1.10)).as_deref(), Some("Infinity"));

        let huge = surcharge("1e30", dec!(1.10)).unwrap();
        assert!(huge.ends_with(".00"), "unexpected text {huge}");
        assert!(huge.starts_with("11"), "unexpected text {huge}");
    }

    // =========================================================================
    // round_to_integer tests
    // =========================================================================

    #[test]
    fn round_to_integer_rounds_half_up() {
        assert_eq!(round_to_integer("2.5").as_deref(), Some("3"));
        assert_eq!(round_to_integer("0.5").as_deref(), Some("1"));
    }

    #[test]
    fn round_to_integer_rounds_down_below_half() {
        assert_eq!(round_to_integer("2.4").as_deref(), Some("2"));
    }

    #[test]
    fn round_to_integer_rounds_negative_ties_away_from_zero() {
        assert_eq!(round_to_integer("-2.5").as_deref(), Some("-3"));
    }

    #[test]
    fn round_to_integer_never_shows_negative_zero() {
        assert_eq!(round_to_integer("-0.2").as_deref(), Some("0"));
    }

    #[test]
    fn round_to_integer_drops_trailing_zeros() {
        assert_eq!(round_to_integer("110.00").as_deref(), Some("110"));
    }

    #[test]
    fn round_to_integer_ignores_non_numeric_entry() {
        assert_eq!(round_to_integer("今日の運勢は…吉。"), None);
    }
}
