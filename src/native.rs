//! Truthiness and boolean identity checks.
//!
//! These rules mirror truthiness in control expressions: only the explicit
//! `false` and the absent marker are falsy. Empty strings, zero and empty
//! collections are all truthy.

use crate::Value;

/// Returns `false` for `Bool(false)` and `Null`, `true` for every other value.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{to_native_bool, Value};
///
/// assert!(!to_native_bool(&Value::Null));
/// assert!(!to_native_bool(&Value::Bool(false)));
/// assert!(to_native_bool(&Value::from("")));
/// assert!(to_native_bool(&Value::from(0)));
/// assert!(to_native_bool(&Value::Array(vec![])));
/// ```
#[inline]
#[must_use]
pub fn to_native_bool(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Alias of [`to_native_bool`].
#[inline]
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    to_native_bool(value)
}

/// Returns `true` only for `Bool(true)` and `Bool(false)`.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{is_boolean, Value};
///
/// assert!(is_boolean(&Value::Bool(false)));
/// assert!(!is_boolean(&Value::Null));
/// assert!(!is_boolean(&Value::from("true")));
/// ```
#[inline]
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    value.is_bool()
}

/// Returns `true` only for `Bool(true)`.
#[inline]
#[must_use]
pub fn is_true(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// Returns `true` only for `Bool(false)`. The absent marker is not false.
#[inline]
#[must_use]
pub fn is_false(value: &Value) -> bool {
    matches!(value, Value::Bool(false))
}
