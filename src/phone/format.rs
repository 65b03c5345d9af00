//! Pure phone-number formatting and validation.
//!
//! Every function here is total: garbage input degrades to an empty or
//! invalid result, never a panic.

use super::countries::{CountryPhoneSpec, COUNTRIES};

/// Fewest digits a number may have and still be accepted.
pub const MIN_DIGITS: usize = 7;

/// Most digits a number may have (E.164 maximum).
pub const MAX_DIGITS: usize = 15;

/// Strip everything except digits, spaces, hyphens and parentheses.
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

/// Only the ASCII digits of `value`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Overlay a digit-format pattern onto the digits of `cleaned`.
///
/// Each '#' consumes one digit; literal characters are copied through while
/// digits remain. Output ends as soon as the digits run out (no dangling
/// separators or '#') or the pattern runs out (surplus digits are dropped).
/// Without a pattern the input is returned unchanged.
pub fn apply_format(cleaned: &str, pattern: Option<&str>) -> String {
    let Some(pattern) = pattern else {
        return cleaned.to_string();
    };

    let digits = digits_only(cleaned);
    let mut digits = digits.chars().peekable();
    let mut formatted = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = digits.next() {
                formatted.push(d);
            }
        } else {
            formatted.push(slot);
        }
    }

    formatted
}

/// Length check shared by every country: digit count within `[7, 15]`.
pub fn validate(cleaned: &str) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits_only(cleaned).len())
}

/// Join a dial code and a formatted local number for submission.
pub fn compose_full_number(dial_code: &str, formatted: &str) -> String {
    let formatted = formatted.trim();
    if formatted.is_empty() {
        return dial_code.trim().to_string();
    }
    format!("{} {}", dial_code, formatted).trim().to_string()
}

/// A full number split back into its country and local part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    /// Country whose dial code prefixed the value, if any did
    pub country: Option<&'static CountryPhoneSpec>,

    /// Everything after the dial code, trimmed
    pub remainder: String,
}

/// Split a full number (as produced by [`compose_full_number`]) into country
/// and local digits.
///
/// The longest matching dial code wins. When several countries share that
/// dial code, `preferred` is kept if it is one of them, otherwise the first
/// table entry is used.
pub fn parse_full_number(
    value: &str,
    preferred: Option<&'static CountryPhoneSpec>,
) -> ParsedNumber {
    let value = value.trim();

    let best_len = COUNTRIES
        .iter()
        .filter(|c| value.starts_with(c.dial_code))
        .map(|c| c.dial_code.len())
        .max();

    let Some(best_len) = best_len else {
        return ParsedNumber {
            country: None,
            remainder: value.to_string(),
        };
    };

    let dial_code = &value[..best_len];
    let country = preferred
        .filter(|p| p.dial_code == dial_code)
        .or_else(|| COUNTRIES.iter().find(|c| c.dial_code == dial_code));

    ParsedNumber {
        country,
        remainder: value[best_len..].trim().to_string(),
    }
}
