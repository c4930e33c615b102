//! Lenient operand parsing and default number formatting.

use thiserror::Error;

const INFINITY_LITERAL: &str = "Infinity";

/// Error returned when operand text does not begin with a number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{input}' does not start with a number")]
pub struct ParseOperandError {
    input: String,
}

impl ParseOperandError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses the longest numeric prefix of `text` as an `f64`.
///
/// Leading whitespace and an optional sign are accepted, followed by digits
/// with an optional fraction and exponent, or the literal `Infinity`.
/// Anything after the prefix is ignored, so `"1.2.3"` parses as `1.2` and
/// `"5abc"` as `5`.
///
/// # Errors
///
/// Returns [`ParseOperandError`] when no digit appears before the first
/// character that cannot belong to a number.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::parse_operand;
///
/// assert_eq!(parse_operand("-12.5"), Ok(-12.5));
/// assert_eq!(parse_operand("1.2.3"), Ok(1.2));
/// assert!(parse_operand("Error").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<f64, ParseOperandError> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[sign_len..].starts_with(INFINITY_LITERAL) {
        let negative = bytes.first() == Some(&b'-');
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut end = sign_len;
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return Err(ParseOperandError {
            input: text.to_string(),
        });
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().map_err(|_| ParseOperandError {
        input: text.to_string(),
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a number the way the display shows results.
///
/// * `NaN`, `Infinity` and `-Infinity` are spelled out.
/// * Negative zero prints as `0` and integral values have no `.0`.
/// * Magnitudes of at least 1e21 or below 1e-6 use exponent form with an
///   explicit exponent sign (`1e+21`, `1.5e-7`).
/// * Everything else uses the shortest text that parses back to the same
///   value.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}{INFINITY_LITERAL}");
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    value.to_string()
}
