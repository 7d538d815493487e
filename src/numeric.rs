//! Numeric-prefix conversion of stored values.
//!
//! Values are converted the way C's `atoi` and `atof` read text: leading
//! whitespace is skipped, the longest numeric prefix is used, and text with
//! no numeric prefix converts to zero.

use crate::normalize::is_space;

/// Convert the leading integer of `text`.
///
/// Values outside the `i64` range saturate.
///
/// ```
/// use ini_reader::numeric::leading_int;
///
/// assert_eq!(leading_int("  -255"), -255);
/// assert_eq!(leading_int("42 apples"), 42);
/// assert_eq!(leading_int("accelerate"), 0);
/// ```
#[must_use]
pub fn leading_int(text: &str) -> i64 {
    let text = text.trim_start_matches(is_space);
    let (negative, digits) = split_sign(text);
    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        let digit = i64::from(digit);
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    value
}

/// Convert the leading floating-point number of `text`.
///
/// Accepts decimal notation with an optional exponent, and `inf`,
/// `infinity` or `nan` in any case.
///
/// ```
/// use ini_reader::numeric::leading_double;
///
/// assert_eq!(leading_double("2.5"), 2.5);
/// assert_eq!(leading_double(" 1e3x"), 1000.0);
/// assert_eq!(leading_double(""), 0.0);
/// ```
#[must_use]
pub fn leading_double(text: &str) -> f64 {
    let text = text.trim_start_matches(is_space);
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let (negative, rest) = split_sign(text);
    if let Some(special) = special_value(rest, negative) {
        return special;
    }
    let len = sign_len + decimal_prefix_len(rest);
    text.get(..len)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn special_value(text: &str, negative: bool) -> Option<f64> {
    let starts_with = |word: &str| {
        text.get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
    };
    if starts_with("inf") {
        Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY })
    } else if starts_with("nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Length of the longest `digits[.digits][e[sign]digits]` prefix.
fn decimal_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .iter()
            .skip(start)
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let integral = digits_from(0);
    let mut end = integral;
    let mut mantissa_digits = integral;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        mantissa_digits += fraction;
        if mantissa_digits > 0 {
            end += 1 + fraction;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}
