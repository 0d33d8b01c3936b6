//! Fixed output vocabularies.
//!
//! Each formatter runs the selected coercion rule and maps its answer onto a
//! fixed pair: `1`/`0`, `"y"`/`"n"`, `"yes"`/`"no"`, `"on"`/`"off"` or
//! `true`/`false`. Absent input skips the rule entirely and yields the
//! configured unknown value, untouched.
//!
//! ## Examples
//!
//! ```rust
//! use semantic_bool::{to_one_or_zero, to_one_or_zero_with, FormatOptions, Formatted, Selector, Value};
//!
//! assert_eq!(to_one_or_zero(&Value::Bool(false)).unwrap(), Formatted::Known(0));
//! assert_eq!(to_one_or_zero(&Value::Null).unwrap(), Formatted::Unknown(false));
//!
//! let options = FormatOptions::new().by(Selector::Blank);
//! assert_eq!(to_one_or_zero_with(&Value::Bool(false), options).unwrap(), Formatted::Known(1));
//! ```

use crate::{FormatOptions, Result, Value};
use std::fmt;

/// The outcome of a formatter: a word from its vocabulary, or the unknown
/// value for absent input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formatted<T, D = bool> {
    Known(T),
    Unknown(D),
}

impl<T, D> Formatted<T, D> {
    /// Returns the vocabulary word, or `None` for absent input.
    #[must_use]
    pub fn known(self) -> Option<T> {
        match self {
            Formatted::Known(word) => Some(word),
            Formatted::Unknown(_) => None,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Formatted::Unknown(_))
    }
}

impl<T: fmt::Display, D: fmt::Display> fmt::Display for Formatted<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatted::Known(word) => word.fmt(f),
            Formatted::Unknown(unknown) => unknown.fmt(f),
        }
    }
}

fn format_with<T, D>(
    value: &Value,
    options: FormatOptions<D>,
    yes: T,
    no: T,
) -> Result<Formatted<T, D>> {
    if value.is_null() {
        return Ok(Formatted::Unknown(options.unknown));
    }

    let word = if options.selector.apply(value)? {
        yes
    } else {
        no
    };
    Ok(Formatted::Known(word))
}

/// Formats a value as `1` or `0` using truthiness.
///
/// # Errors
///
/// Never fails with default options; see [`to_one_or_zero_with`].
pub fn to_one_or_zero(value: &Value) -> Result<Formatted<u8>> {
    to_one_or_zero_with(value, FormatOptions::new())
}

/// Formats a value as `1` or `0` using the configured rule.
///
/// # Errors
///
/// Propagates errors from the selected rule.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{to_one_or_zero_with, FormatOptions, Formatted, Value};
///
/// let options = FormatOptions::new().unknown(127);
/// assert_eq!(to_one_or_zero_with(&Value::Null, options).unwrap(), Formatted::Unknown(127));
/// ```
pub fn to_one_or_zero_with<D>(
    value: &Value,
    options: FormatOptions<D>,
) -> Result<Formatted<u8, D>> {
    format_with(value, options, 1, 0)
}

/// Formats a value as `"y"` or `"n"` using truthiness.
///
/// # Errors
///
/// Never fails with default options; see [`to_y_or_n_with`].
pub fn to_y_or_n(value: &Value) -> Result<Formatted<&'static str>> {
    to_y_or_n_with(value, FormatOptions::new())
}

/// Formats a value as `"y"` or `"n"` using the configured rule.
///
/// # Errors
///
/// Propagates errors from the selected rule.
pub fn to_y_or_n_with<D>(
    value: &Value,
    options: FormatOptions<D>,
) -> Result<Formatted<&'static str, D>> {
    format_with(value, options, "y", "n")
}

/// Formats a value as `"yes"` or `"no"` using truthiness.
///
/// # Errors
///
/// Never fails with default options; see [`to_yes_or_no_with`].
pub fn to_yes_or_no(value: &Value) -> Result<Formatted<&'static str>> {
    to_yes_or_no_with(value, FormatOptions::new())
}

/// Formats a value as `"yes"` or `"no"` using the configured rule.
///
/// # Errors
///
/// Propagates errors from the selected rule.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{to_yes_or_no, to_yes_or_no_with, FormatOptions, Formatted, Selector, Value};
///
/// let empty = Value::Array(vec![]);
/// assert_eq!(to_yes_or_no(&empty).unwrap(), Formatted::Known("yes"));
///
/// let options = FormatOptions::new().by(Selector::Present);
/// assert_eq!(to_yes_or_no_with(&empty, options).unwrap(), Formatted::Known("no"));
/// ```
pub fn to_yes_or_no_with<D>(
    value: &Value,
    options: FormatOptions<D>,
) -> Result<Formatted<&'static str, D>> {
    format_with(value, options, "yes", "no")
}

/// Formats a value as `"on"` or `"off"` using truthiness.
///
/// # Errors
///
/// Never fails with default options; see [`to_on_or_off_with`].
pub fn to_on_or_off(value: &Value) -> Result<Formatted<&'static str>> {
    to_on_or_off_with(value, FormatOptions::new())
}

/// Formats a value as `"on"` or `"off"` using the configured rule.
///
/// # Errors
///
/// Propagates errors from the selected rule.
pub fn to_on_or_off_with<D>(
    value: &Value,
    options: FormatOptions<D>,
) -> Result<Formatted<&'static str, D>> {
    format_with(value, options, "on", "off")
}

/// Formats a value as `true` or `false` using truthiness.
///
/// # Errors
///
/// Never fails with default options; see [`to_true_or_false_with`].
pub fn to_true_or_false(value: &Value) -> Result<Formatted<bool>> {
    to_true_or_false_with(value, FormatOptions::new())
}

/// Formats a value as `true` or `false` using the configured rule.
///
/// # Errors
///
/// Propagates errors from the selected rule.
pub fn to_true_or_false_with<D>(
    value: &Value,
    options: FormatOptions<D>,
) -> Result<Formatted<bool, D>> {
    format_with(value, options, true, false)
}
