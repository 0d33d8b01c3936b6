//! # semantic_bool
//!
//! Coerce loosely-typed values into booleans under named semantics.
//!
//! Values coming from environment variables, form fields, serialized config or
//! legacy records rarely say `true` or `false` plainly. This crate collapses
//! them into a canonical boolean under one of several distinct rules, and
//! formats the answer into the usual output vocabularies.
//!
//! ## Rules
//!
//! | Rule | Function | Falsy |
//! |---|---|---|
//! | Truthiness | [`to_native_bool`] | `false` and absent only |
//! | Env flag | [`to_env_bool`] | anything but an affirmative token or positive integer |
//! | Tri-state cast | [`to_tri_state_bool`] | `0 f F false FALSE off OFF`, integer zero; `""` is unknown |
//! | Blank | [`is_blank`] / [`is_present`] | content-free values: absent, `false`, empty, whitespace |
//!
//! ## Quick Start
//!
//! ```rust
//! use semantic_bool::{is_blank, to_env_bool, to_native_bool, to_tri_state_bool, Value};
//!
//! let input = Value::from("0");
//! assert!(to_native_bool(&input));
//! assert!(!to_env_bool(&input));
//! assert_eq!(to_tri_state_bool(&input), Some(false));
//! assert!(!is_blank(&input).unwrap());
//! ```
//!
//! ### Formatting
//!
//! ```rust
//! use semantic_bool::{to_on_or_off_with, to_yes_or_no, FormatOptions, Formatted, Value};
//!
//! assert_eq!(to_yes_or_no(&Value::Bool(false)).unwrap(), Formatted::Known("no"));
//!
//! let options = FormatOptions::new().by_name("to_env_bool").unwrap().unknown("unset");
//! assert_eq!(to_on_or_off_with(&Value::from("YES"), options.clone()).unwrap(), Formatted::Known("on"));
//! assert_eq!(to_on_or_off_with(&Value::Null, options).unwrap(), Formatted::Unknown("unset"));
//! ```
//!
//! ### From serde types
//!
//! ```rust
//! use semantic_bool::{is_present, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Signup { email: String, referrer: Option<String> }
//!
//! let signup = to_value(&Signup { email: "a@b.c".into(), referrer: None }).unwrap();
//! let fields = signup.as_object().unwrap();
//! assert!(is_present(fields.get("email").unwrap()).unwrap());
//! assert!(!is_present(fields.get("referrer").unwrap()).unwrap());
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (a `debug` event when a whitespace
//! matcher is built for a new encoding, a `trace` event when a selector name is
//! rejected) and never installs a subscriber.
//!
//! ## Demos
//!
//! `demos/env_flags.rs` reads flags from the process environment. Run it with
//! `cargo run --example env_flags`.

pub mod blank;
pub mod env;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod native;
pub mod options;
pub mod ser;
pub mod text;
pub mod tri_state;
pub mod value;

pub use blank::{is_blank, is_blank_text, is_present, WHITESPACE};
pub use env::{to_env_bool, TRUTHY_TOKENS};
pub use error::{Error, Result};
pub use format::{
    to_on_or_off, to_on_or_off_with, to_one_or_zero, to_one_or_zero_with, to_true_or_false,
    to_true_or_false_with, to_y_or_n, to_y_or_n_with, to_yes_or_no, to_yes_or_no_with, Formatted,
};
pub use map::{ValueMap, ValueSet};
pub use native::{is_boolean, is_false, is_true, to_bool, to_native_bool};
pub use options::{FormatOptions, Selector};
pub use ser::{to_value, ValueSerializer};
pub use text::{Encoding, Text, WhatwgEncoding};
pub use tri_state::{to_tri_state_bool, FALSY_TOKENS};
pub use value::{Blank, Length, Number, Object, Temporal, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Inbox(Vec<String>);

    impl Length for Inbox {
        fn length(&self) -> usize {
            self.0.len()
        }
    }

    impl Object for Inbox {
        fn type_name(&self) -> &str {
            "Inbox"
        }

        fn as_length(&self) -> Option<&dyn Length> {
            Some(self)
        }
    }

    #[test]
    fn test_rules_disagree_on_the_same_input() {
        let zero = Value::from("0");
        assert!(to_native_bool(&zero));
        assert!(!to_env_bool(&zero));
        assert_eq!(to_tri_state_bool(&zero), Some(false));
        assert!(!is_blank(&zero).unwrap());
    }

    #[test]
    fn test_length_capability_drives_blank() {
        assert!(is_blank(&Value::custom(Inbox(vec![]))).unwrap());
        let inbox = Inbox(vec!["hi".into()]);
        assert!(is_present(&Value::custom(inbox)).unwrap());
    }

    #[test]
    fn test_formatting_with_selector_names() {
        for selector in Selector::ALL {
            let options = FormatOptions::new()
                .by_name(selector.name())
                .unwrap()
                .unknown(7);
            assert_eq!(
                to_one_or_zero_with(&Value::Null, options).unwrap(),
                Formatted::Unknown(7)
            );
        }
    }

    #[test]
    fn test_formatter_vocabularies() {
        assert_eq!(
            to_one_or_zero(&Value::Bool(false)).unwrap(),
            Formatted::Known(0)
        );
        let blank = FormatOptions::new().by(Selector::Blank);
        assert_eq!(
            to_one_or_zero_with(&Value::Bool(false), blank).unwrap(),
            Formatted::Known(1)
        );
        assert_eq!(
            to_y_or_n(&Value::Bool(true)).unwrap(),
            Formatted::Known("y")
        );
        assert_eq!(
            to_yes_or_no(&Value::Bool(false)).unwrap(),
            Formatted::Known("no")
        );
        assert_eq!(
            to_on_or_off(&Value::Bool(true)).unwrap(),
            Formatted::Known("on")
        );
        assert_eq!(
            to_true_or_false(&Value::from(0)).unwrap(),
            Formatted::Known(true)
        );
    }
}
