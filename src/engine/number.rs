//! Number <-> display text conversion
//!
//! The calculator keeps operands as text (what the user typed, or the last
//! result). These helpers define the two directions of that boundary:
//!
//! - [`format_number`] renders a result the way the display shows it:
//!   shortest round-trip digits, plain notation for moderate magnitudes and
//!   exponent notation (`1e+21`, `1.5e-7`) outside of it.
//! - [`parse_number`] reads the leading numeric prefix of a text, so a
//!   pending expression such as `"7 +"` still yields its left operand.

/// Largest decimal exponent still printed in plain notation.
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent still printed in plain notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Format a value for display.
///
/// Non-finite values print as `Infinity`, `-Infinity` and `NaN`; negative
/// zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{sign}{scientific}");
    };

    // Position of the decimal point relative to the first digit
    let point = exponent + 1;
    let len = digits.len() as i32;

    let body = if len <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exponent.unsigned_abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exponent.unsigned_abs())
        }
    };

    format!("{sign}{body}")
}

/// Parse the leading number of `text`.
///
/// Leading whitespace is skipped and anything after the numeric prefix is
/// ignored. `Infinity` (optionally signed) is accepted. Returns `None` when
/// no digits are found or the value is `NaN`.
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut digit_count = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digit_count += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digit_count += 1;
        }
    }
    if digit_count == 0 {
        return None;
    }

    // An exponent marker only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}
