//! Blank and present.
//!
//! A value is blank when it carries no content: the absent marker, `false`,
//! an empty collection or symbol, or text made only of whitespace. Numbers and
//! temporal values always carry content, so they are never blank, even zero.
//!
//! ## Whitespace in other encodings
//!
//! Whitespace is the Unicode `White_Space` property. UTF-8 text is matched by
//! a prebuilt pattern. Text in any other encoding is matched by a pattern
//! built from the encoded forms of the whitespace characters that encoding
//! can represent; those matchers are built on first use and cached per
//! encoding for the life of the process.
//!
//! ## Examples
//!
//! ```rust
//! use semantic_bool::{is_blank, is_present, Encoding, Text, Value};
//!
//! assert!(is_blank(&Value::from(" \t\n")).unwrap());
//! assert!(is_blank(&Value::from("\u{3000}")).unwrap());
//! assert!(!is_blank(&Value::from(0)).unwrap());
//!
//! let wide = Text::encode("\u{a0} ", Encoding::Utf16Be).unwrap();
//! assert!(is_blank(&Value::from(wide)).unwrap());
//! assert!(!is_present(&Value::Array(vec![])).unwrap());
//! ```

use crate::{Encoding, Error, Result, Text, Value};
use dashmap::DashMap;
use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::sync::Arc;

/// Every code point with the Unicode `White_Space` property.
pub const WHITESPACE: [char; 25] = [
    '\u{0009}', '\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0020}', '\u{0085}', '\u{00A0}',
    '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}',
    '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}',
    '\u{3000}',
];

lazy_static! {
    static ref UTF8_BLANK: Regex = Regex::new(r"\A\s*\z").unwrap();

    // Racing builders insert equivalent matchers; the first insert wins.
    static ref ENCODED_BLANKS: DashMap<Encoding, Arc<BlankMatcher>> = DashMap::new();
}

#[derive(Debug)]
enum BlankMatcher {
    /// Anchored byte pattern: any run of encoded whitespace sequences.
    Pattern(Regex),
    /// Stateful encodings are decoded before matching.
    Decoded(Encoding),
}

impl BlankMatcher {
    fn build(encoding: Encoding) -> Result<Self> {
        if encoding.is_stateful() {
            return Ok(BlankMatcher::Decoded(encoding));
        }

        let mut sequences: Vec<Vec<u8>> = Vec::with_capacity(WHITESPACE.len());
        for c in WHITESPACE {
            if let Some(bytes) = encoding.encode_char(c) {
                if !bytes.is_empty() && !sequences.contains(&bytes) {
                    sequences.push(bytes);
                }
            }
        }

        let alternatives = sequences
            .iter()
            .map(|bytes| {
                bytes
                    .iter()
                    .map(|b| format!(r"\x{:02X}", b))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?-u)\A(?:{})*\z", alternatives);

        Regex::new(&pattern)
            .map(BlankMatcher::Pattern)
            .map_err(|e| Error::invalid_pattern(encoding.name(), &e.to_string()))
    }

    fn is_match(&self, bytes: &[u8]) -> bool {
        match self {
            BlankMatcher::Pattern(pattern) => pattern.is_match(bytes),
            BlankMatcher::Decoded(encoding) => encoding
                .decode(bytes)
                .map_or(false, |s| s.chars().all(char::is_whitespace)),
        }
    }
}

fn matcher_for(encoding: Encoding) -> Result<Arc<BlankMatcher>> {
    if let Some(cached) = ENCODED_BLANKS.get(&encoding) {
        return Ok(Arc::clone(cached.value()));
    }

    let built = Arc::new(BlankMatcher::build(encoding)?);
    tracing::debug!(encoding = %encoding, "built blank matcher");
    let entry = ENCODED_BLANKS.entry(encoding).or_insert(built);
    Ok(Arc::clone(entry.value()))
}

/// Returns `true` if `text` is empty or made only of whitespace in its own encoding.
///
/// Bytes that are malformed for the text's encoding are not whitespace.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the matcher for the encoding cannot be built.
pub fn is_blank_text(text: &Text) -> Result<bool> {
    if text.is_empty() {
        return Ok(true);
    }

    match text.encoding() {
        Encoding::Utf8 => Ok(UTF8_BLANK.is_match(text.as_bytes())),
        encoding => Ok(matcher_for(encoding)?.is_match(text.as_bytes())),
    }
}

/// Returns `true` if the value carries no content.
///
/// Custom objects are asked first: an [`Object::as_blank`](crate::Object::as_blank)
/// hook answers directly, otherwise an
/// [`Object::as_length`](crate::Object::as_length) of zero means blank, and an
/// object with neither is not blank.
///
/// # Errors
///
/// Returns [`Error::CapabilityMissing`] for [`Value::Bare`], which cannot be
/// asked whether it is blank.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{is_blank, Value};
///
/// assert!(is_blank(&Value::Null).unwrap());
/// assert!(is_blank(&Value::Bool(false)).unwrap());
/// assert!(!is_blank(&Value::Bool(true)).unwrap());
/// assert!(is_blank(&Value::from("   ")).unwrap());
/// assert!(!is_blank(&Value::from("a")).unwrap());
/// assert!(is_blank(&Value::bare(())).is_err());
/// ```
pub fn is_blank(value: &Value) -> Result<bool> {
    match value {
        Value::Custom(object) => Ok(match (object.as_blank(), object.as_length()) {
            (Some(hook), _) => hook.is_blank(),
            (None, Some(sized)) => sized.length() == 0,
            (None, None) => false,
        }),
        Value::Null => Ok(true),
        Value::Bool(b) => Ok(!b),
        Value::Array(arr) => Ok(arr.is_empty()),
        Value::Object(map) => Ok(map.is_empty()),
        Value::Set(set) => Ok(set.is_empty()),
        Value::Symbol(name) => Ok(name.is_empty()),
        Value::String(text) => is_blank_text(text),
        Value::Number(_) | Value::Temporal(_) => Ok(false),
        Value::Bare(_) => Err(Error::capability_missing(value.type_name(), "is_blank")),
    }
}

/// Returns `true` if the value is not blank.
///
/// # Errors
///
/// Fails exactly when [`is_blank`] fails.
pub fn is_present(value: &Value) -> Result<bool> {
    is_blank(value).map(|blank| !blank)
}
