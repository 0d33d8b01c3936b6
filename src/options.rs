//! Configuration for the formatting functions.
//!
//! This module provides:
//!
//! - [`Selector`]: which coercion rule a formatter delegates to
//! - [`FormatOptions`]: the selector plus the value returned for absent input
//!
//! ## Examples
//!
//! ```rust
//! use semantic_bool::{to_y_or_n_with, FormatOptions, Formatted, Selector, Value};
//!
//! // Delegate to env-style parsing instead of truthiness
//! let options = FormatOptions::new().by(Selector::EnvBool);
//! assert_eq!(to_y_or_n_with(&Value::from("n"), options).unwrap(), Formatted::Known("n"));
//!
//! // Choose what absent input turns into
//! let options = FormatOptions::new().unknown("");
//! assert_eq!(to_y_or_n_with(&Value::Null, options).unwrap(), Formatted::Unknown(""));
//! ```

use crate::{Error, Result, Value};
use std::fmt;
use std::str::FromStr;

/// A named coercion rule.
///
/// Selectors parse from the name of the function they stand for; a few short
/// aliases are accepted as well.
///
/// | Selector | Names |
/// |---|---|
/// | `NativeBool` | `to_native_bool`, `to_bool` |
/// | `EnvBool` | `to_env_bool` |
/// | `TriStateBool` | `to_tri_state_bool` |
/// | `Blank` | `is_blank`, `blank` |
/// | `Present` | `is_present`, `present` |
/// | `Boolean` | `is_boolean` |
/// | `True` | `is_true` |
/// | `False` | `is_false` |
///
/// # Examples
///
/// ```rust
/// use semantic_bool::Selector;
///
/// assert_eq!("blank".parse::<Selector>().unwrap(), Selector::Blank);
/// assert_eq!(Selector::default(), Selector::NativeBool);
/// assert!("by_magic".parse::<Selector>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    #[default]
    NativeBool,
    EnvBool,
    /// Unknown (empty text) counts as `false`.
    TriStateBool,
    Blank,
    Present,
    Boolean,
    True,
    False,
}

impl Selector {
    pub const ALL: [Selector; 8] = [
        Selector::NativeBool,
        Selector::EnvBool,
        Selector::TriStateBool,
        Selector::Blank,
        Selector::Present,
        Selector::Boolean,
        Selector::True,
        Selector::False,
    ];

    /// Returns the canonical name of this selector.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Selector::NativeBool => "to_native_bool",
            Selector::EnvBool => "to_env_bool",
            Selector::TriStateBool => "to_tri_state_bool",
            Selector::Blank => "is_blank",
            Selector::Present => "is_present",
            Selector::Boolean => "is_boolean",
            Selector::True => "is_true",
            Selector::False => "is_false",
        }
    }

    /// Runs the selected rule on `value`.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::CapabilityMissing`] from the blank/present rules.
    pub fn apply(&self, value: &Value) -> Result<bool> {
        match self {
            Selector::NativeBool => Ok(crate::to_native_bool(value)),
            Selector::EnvBool => Ok(crate::to_env_bool(value)),
            Selector::TriStateBool => Ok(crate::to_tri_state_bool(value).unwrap_or(false)),
            Selector::Blank => crate::is_blank(value),
            Selector::Present => crate::is_present(value),
            Selector::Boolean => Ok(crate::is_boolean(value)),
            Selector::True => Ok(crate::is_true(value)),
            Selector::False => Ok(crate::is_false(value)),
        }
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "to_native_bool" | "to_bool" => Ok(Selector::NativeBool),
            "to_env_bool" => Ok(Selector::EnvBool),
            "to_tri_state_bool" => Ok(Selector::TriStateBool),
            "is_blank" | "blank" => Ok(Selector::Blank),
            "is_present" | "present" => Ok(Selector::Present),
            "is_boolean" => Ok(Selector::Boolean),
            "is_true" => Ok(Selector::True),
            "is_false" => Ok(Selector::False),
            _ => {
                tracing::trace!(selector = name, "rejected unsupported selector");
                Err(Error::unsupported_selector(name))
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options shared by the formatting functions.
///
/// `D` is the type returned for absent input. It defaults to `bool`, with
/// `false` as the value, and is returned exactly as given.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{FormatOptions, Selector};
///
/// let options = FormatOptions::new();
/// assert_eq!(options.selector, Selector::NativeBool);
/// assert!(!options.unknown);
///
/// let options = FormatOptions::new().by(Selector::Present).unknown(127);
/// assert_eq!(options.selector, Selector::Present);
/// assert_eq!(options.unknown, 127);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FormatOptions<D = bool> {
    pub selector: Selector,
    pub unknown: D,
}

impl Default for FormatOptions<bool> {
    fn default() -> Self {
        FormatOptions {
            selector: Selector::default(),
            unknown: false,
        }
    }
}

impl FormatOptions<bool> {
    /// Creates default options: truthiness, `false` for absent input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> FormatOptions<D> {
    /// Sets the coercion rule to delegate to.
    #[must_use]
    pub fn by(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    /// Sets the coercion rule by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSelector`] if no rule has that name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::{FormatOptions, Selector};
    ///
    /// let options = FormatOptions::new().by_name("present").unwrap();
    /// assert_eq!(options.selector, Selector::Present);
    /// assert!(FormatOptions::new().by_name("not_supported").is_err());
    /// ```
    pub fn by_name(self, name: &str) -> Result<Self> {
        Ok(self.by(name.parse()?))
    }

    /// Sets the value returned for absent input.
    #[must_use]
    pub fn unknown<E>(self, unknown: E) -> FormatOptions<E> {
        FormatOptions {
            selector: self.selector,
            unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for selector in Selector::ALL {
            assert_eq!(selector.name().parse::<Selector>().unwrap(), selector);
            assert_eq!(selector.to_string(), selector.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("to_bool".parse::<Selector>().unwrap(), Selector::NativeBool);
        assert_eq!("present".parse::<Selector>().unwrap(), Selector::Present);
    }

    #[test]
    fn test_unknown_names_fail() {
        assert_eq!(
            "not_supported".parse::<Selector>(),
            Err(Error::UnsupportedSelector("not_supported".to_string()))
        );
        assert!("Is_Blank".parse::<Selector>().is_err());
        assert!("".parse::<Selector>().is_err());
    }

    #[test]
    fn test_apply_dispatches() {
        let empty = Value::from("");
        assert!(Selector::NativeBool.apply(&empty).unwrap());
        assert!(!Selector::EnvBool.apply(&empty).unwrap());
        assert!(!Selector::TriStateBool.apply(&empty).unwrap());
        assert!(Selector::Blank.apply(&empty).unwrap());
        assert!(!Selector::Present.apply(&empty).unwrap());
        assert!(!Selector::Boolean.apply(&empty).unwrap());
        assert!(Selector::Present.apply(&Value::bare(())).is_err());
    }

    #[test]
    fn test_unknown_changes_type_and_keeps_selector() {
        let options = FormatOptions::new()
            .by(Selector::EnvBool)
            .unknown("unknown");
        assert_eq!(options.selector, Selector::EnvBool);
        assert_eq!(options.unknown, "unknown");
    }
}
