//! Env-style flags.
//!
//! Environment variables are strings, so this rule reads a value's textual
//! form and accepts it when it is one of a fixed set of affirmative spellings
//! or a positive integer. Everything else, including unknown capitalisations
//! such as `"TRue"`, is `false`.

use crate::Value;
use num_bigint::{BigInt, BigUint, Sign};

/// Spellings that read as `true`, compared case-sensitively.
pub const TRUTHY_TOKENS: [&str; 13] = [
    "t", "T", "true", "True", "TRUE", "on", "On", "ON", "y", "Y", "yes", "Yes", "YES",
];

/// Classifies a value the way an env flag would be read.
///
/// 1. The textual form of the value is taken (`Null` reads as `""`).
/// 2. Empty text, or a value with no textual form, is `false`.
/// 3. A member of [`TRUTHY_TOKENS`] is `true`.
/// 4. Otherwise the text must parse as an integer literal and is `true` iff
///    it is positive. Surrounding ASCII whitespace and a sign are allowed.
///    `0x`, `0b`, `0o` and `0d` pick the radix, a bare leading `0` means
///    octal, and single `_` separators may sit between digits. Size is
///    unbounded.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{to_env_bool, Value};
///
/// assert!(to_env_bool(&Value::from("yes")));
/// assert!(to_env_bool(&Value::from("TRUE")));
/// assert!(!to_env_bool(&Value::from("TRue")));
/// assert!(to_env_bool(&Value::from("2")));
/// assert!(to_env_bool(&Value::from("1\n")));
/// assert!(to_env_bool(&Value::from("0x1A")));
/// assert!(!to_env_bool(&Value::from("08")));
/// assert!(!to_env_bool(&Value::from("-1")));
/// assert!(!to_env_bool(&Value::from("1.0")));
/// assert!(!to_env_bool(&Value::Null));
/// ```
#[must_use]
pub fn to_env_bool(value: &Value) -> bool {
    let textual = match value.textual() {
        Some(text) => text,
        None => return false,
    };
    let text: &str = &textual;

    if text.is_empty() {
        return false;
    }

    if TRUTHY_TOKENS.contains(&text) {
        return true;
    }

    parse_integer(text).map_or(false, |integer| integer.sign() == Sign::Plus)
}

fn parse_integer(text: &str) -> Option<BigInt> {
    let text = text.trim_matches(|c: char| matches!(c, ' ' | '\t'..='\r'));
    let (sign, unsigned) = match text.as_bytes().first()? {
        b'-' => (Sign::Minus, &text[1..]),
        b'+' => (Sign::Plus, &text[1..]),
        _ => (Sign::Plus, text),
    };

    let (radix, digits) = split_radix(unsigned);
    let digits = strip_separators(digits)?;
    let magnitude = BigUint::parse_bytes(&digits, radix)?;
    Some(BigInt::from_biguint(sign, magnitude))
}

fn split_radix(unsigned: &str) -> (u32, &str) {
    match unsigned.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &unsigned[2..]),
        [b'0', b'b' | b'B', ..] => (2, &unsigned[2..]),
        [b'0', b'o' | b'O', ..] => (8, &unsigned[2..]),
        [b'0', b'd' | b'D', ..] => (10, &unsigned[2..]),
        [b'0', b'0'..=b'9' | b'_', ..] => (8, unsigned),
        _ => (10, unsigned),
    }
}

/// Drops `_` separators, which are only allowed singly and between digits.
fn strip_separators(digits: &str) -> Option<Vec<u8>> {
    let bytes = digits.as_bytes();
    if bytes.first() == Some(&b'_') || bytes.last() == Some(&b'_') || digits.contains("__") {
        return None;
    }

    let stripped: Vec<u8> = bytes.iter().copied().filter(|&b| b != b'_').collect();
    if stripped.is_empty() || !stripped.iter().all(u8::is_ascii_alphanumeric) {
        return None;
    }
    Some(stripped)
}
