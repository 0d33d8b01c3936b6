//! Error types for semantic boolean coercion.
//!
//! Coercion itself almost never fails: every rule is total over the values it
//! accepts. The errors below describe integration mistakes rather than bad
//! input data, so callers are expected to fix the call site instead of
//! retrying.
//!
//! ## Error Categories
//!
//! - **Unsupported selectors**: a formatter was asked to delegate to a rule
//!   that does not exist
//! - **Missing capabilities**: an opaque value cannot answer "are you blank?"
//! - **Encoding failures**: text could not be represented in the requested encoding
//! - **Value conversion**: a serde type has no [`Value`](crate::Value) counterpart
//!
//! ## Examples
//!
//! ```rust
//! use semantic_bool::{Error, Selector};
//!
//! let result = "not_supported".parse::<Selector>();
//! assert!(matches!(result, Err(Error::UnsupportedSelector(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the coercion functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A formatter selector named a coercion rule this crate does not define.
    #[error("Unsupported selector: `{0}` is not a coercion rule")]
    UnsupportedSelector(String),

    /// The value exposes no way to answer the requested capability.
    #[error("{type_name} does not respond to `{capability}`")]
    CapabilityMissing {
        type_name: String,
        capability: &'static str,
    },

    /// Text contains a character that has no representation in the target encoding.
    #[error("Cannot encode {character:?} (U+{code:04X}) as {encoding}")]
    Unencodable {
        character: char,
        code: u32,
        encoding: String,
    },

    /// The whitespace matcher for an encoding could not be compiled.
    #[error("Invalid blank pattern for {encoding}: {msg}")]
    InvalidPattern { encoding: String, msg: String },

    /// Unsupported type while converting through serde
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported selector error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::Error;
    ///
    /// let err = Error::unsupported_selector("by_magic");
    /// assert!(err.to_string().contains("by_magic"));
    /// ```
    pub fn unsupported_selector(name: &str) -> Self {
        Error::UnsupportedSelector(name.to_string())
    }

    /// Creates a capability error for a value of the given type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::Error;
    ///
    /// let err = Error::capability_missing("bare object", "is_blank");
    /// assert_eq!(err.to_string(), "bare object does not respond to `is_blank`");
    /// ```
    pub fn capability_missing(type_name: &str, capability: &'static str) -> Self {
        Error::CapabilityMissing {
            type_name: type_name.to_string(),
            capability,
        }
    }

    /// Creates an encoding error for a character the target encoding lacks.
    pub fn unencodable(character: char, encoding: &str) -> Self {
        Error::Unencodable {
            character,
            code: character as u32,
            encoding: encoding.to_string(),
        }
    }

    pub fn invalid_pattern(encoding: &str, msg: &str) -> Self {
        Error::InvalidPattern {
            encoding: encoding.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported type error for types that have no `Value` form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
