//! Number parsing and formatting with JavaScript semantics
//!
//! The display buffer is text, and every sign toggle, percent and evaluation
//! goes through "parse then stringify". To keep the observable output of a
//! browser calculator, parsing follows `parseFloat` (longest numeric prefix,
//! `NaN` otherwise) and formatting follows `Number.prototype.toString`
//! (shortest round-trip digits, exponent notation outside `1e-7..1e21`).

/// Exponent bound above which numbers switch to exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Exponent bound at or below which numbers switch to exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parses the longest numeric prefix of `input`, like JavaScript `parseFloat`
///
/// Leading whitespace is skipped. Accepts an optional sign followed by
/// `Infinity` or a decimal literal with optional fraction and exponent.
/// Returns `NaN` when no prefix is numeric.
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    match decimal_literal_end(bytes, pos) {
        Some(end) => s[..end].parse::<f64>().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Returns the end offset of the decimal literal starting at `start`
fn decimal_literal_end(bytes: &[u8], start: usize) -> Option<usize> {
    let digits_from = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(start);
    let mut end = start + int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = digits_from(exp_start.min(bytes.len()));
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    Some(end)
}

/// Formats a number like JavaScript `String(value)`
///
/// `NaN`, `Infinity` and `-Infinity` are spelled out, negative zero prints
/// as `0`, and the digits are the shortest ones that round-trip.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e2"
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // value = 0.digits * 10^point
    let len = digits.len() as i32;
    let point = exponent + 1;

    if len <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let sign = if point > 0 { '+' } else { '-' };
        let magnitude = (point - 1).abs();
        if len == 1 {
            format!("{digits}e{sign}{magnitude}")
        } else {
            let (lead, rest) = digits.split_at(1);
            format!("{lead}.{rest}e{sign}{magnitude}")
        }
    }
}

/// Parses and re-formats a buffer, treating the empty buffer as zero
#[must_use]
pub fn buffer_value(buffer: &str) -> f64 {
    if buffer.is_empty() {
        0.0
    } else {
        parse_float(buffer)
    }
}
