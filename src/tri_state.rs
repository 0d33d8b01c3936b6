//! Tri-state casting for form and database input.
//!
//! A form field that was left empty is neither true nor false: this rule
//! returns `None` for empty text and otherwise treats a value as `true` unless
//! it is one of a fixed set of falsy spellings.

use crate::Value;

/// Text and symbol spellings that cast to `false`, compared case-sensitively.
///
/// `"False"` and `"Off"` are deliberately absent and cast to `true`.
pub const FALSY_TOKENS: [&str; 7] = ["0", "f", "F", "false", "FALSE", "off", "OFF"];

/// Casts a value to `Some(bool)`, or `None` when the value is empty text.
///
/// The deny-set is `Bool(false)`, integer zero, and [`FALSY_TOKENS`] as text
/// (in any ASCII-compatible encoding) or as symbols. Everything else, the
/// absent marker and `0.0` included, is `Some(true)`.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{to_tri_state_bool, Value};
///
/// assert_eq!(to_tri_state_bool(&Value::from("")), None);
/// assert_eq!(to_tri_state_bool(&Value::from("off")), Some(false));
/// assert_eq!(to_tri_state_bool(&Value::from("Off")), Some(true));
/// assert_eq!(to_tri_state_bool(&Value::from(0)), Some(false));
/// assert_eq!(to_tri_state_bool(&Value::Null), Some(true));
/// ```
#[must_use]
pub fn to_tri_state_bool(value: &Value) -> Option<bool> {
    match value {
        Value::String(text) if text.is_empty() => None,
        other => Some(!is_denied(other)),
    }
}

fn is_denied(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.is_zero_integer(),
        Value::String(text) if text.encoding().is_ascii_compatible() => text
            .decode()
            .map_or(false, |s| FALSY_TOKENS.iter().any(|token| *token == s)),
        Value::Symbol(name) => FALSY_TOKENS.contains(&name.as_str()),
        _ => false,
    }
}
