//! Encoded text.
//!
//! Text coming from outside a Rust program does not always arrive as UTF-8.
//! [`Text`] keeps the raw bytes together with the [`Encoding`] they were
//! written in, so blank detection can match whitespace in the text's own
//! encoding instead of guessing.
//!
//! ## Examples
//!
//! ```rust
//! use semantic_bool::{Encoding, Text};
//!
//! let utf8 = Text::new("hello");
//! assert_eq!(utf8.encoding(), Encoding::Utf8);
//!
//! let wide = Text::encode(" ", Encoding::Utf16Le).unwrap();
//! assert_eq!(wide.as_bytes(), &[0x20, 0x00]);
//! assert_eq!(wide.decode().as_deref(), Some(" "));
//! ```

use crate::{Error, Result};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A character encoding tag.
///
/// The Unicode transformation formats, US-ASCII and raw binary are built in.
/// Every other encoding comes from the WHATWG Encoding Standard through
/// [`encoding_rs`].
///
/// Two encodings are equal when they have the same canonical name.
#[derive(Clone, Copy, Debug)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    Ascii,
    Binary,
    Legacy(WhatwgEncoding),
}

/// A WHATWG encoding other than UTF-8, UTF-16 and `replacement`.
///
/// Only [`Encoding::from_whatwg`] and [`Encoding::for_label`] produce one, so
/// a Unicode encoding always lands on its built-in variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WhatwgEncoding(&'static encoding_rs::Encoding);

impl WhatwgEncoding {
    #[inline]
    #[must_use]
    pub fn get(self) -> &'static encoding_rs::Encoding {
        self.0
    }
}

impl Encoding {
    /// Resolves an encoding label such as `"shift_jis"`, `"latin1"` or `"utf-16le"`.
    ///
    /// Labels are matched case-insensitively after trimming. Besides the WHATWG
    /// labels, `"ascii"`/`"us-ascii"`, `"binary"`/`"ascii-8bit"` and
    /// `"utf-32le"`/`"utf-32be"` are understood. The WHATWG `replacement`
    /// encoding cannot carry text and resolves to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::Encoding;
    ///
    /// assert_eq!(Encoding::for_label("UTF-8"), Some(Encoding::Utf8));
    /// assert_eq!(Encoding::for_label("us-ascii"), Some(Encoding::Ascii));
    /// assert_eq!(Encoding::for_label("sjis").map(|e| e.name()), Some("Shift_JIS"));
    /// assert_eq!(Encoding::for_label("klingon"), None);
    /// ```
    #[must_use]
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        match label.as_str() {
            "ascii" | "us-ascii" => Some(Encoding::Ascii),
            "binary" | "ascii-8bit" => Some(Encoding::Binary),
            "utf-32le" | "utf32le" => Some(Encoding::Utf32Le),
            "utf-32be" | "utf32be" | "utf-32" => Some(Encoding::Utf32Be),
            _ => encoding_rs::Encoding::for_label(label.as_bytes()).and_then(Encoding::from_whatwg),
        }
    }

    /// Wraps an [`encoding_rs`] encoding, mapping the Unicode ones onto the
    /// built-in variants.
    #[must_use]
    pub fn from_whatwg(encoding: &'static encoding_rs::Encoding) -> Option<Self> {
        if encoding == encoding_rs::UTF_8 {
            Some(Encoding::Utf8)
        } else if encoding == encoding_rs::UTF_16LE {
            Some(Encoding::Utf16Le)
        } else if encoding == encoding_rs::UTF_16BE {
            Some(Encoding::Utf16Be)
        } else if encoding == encoding_rs::REPLACEMENT {
            None
        } else {
            Some(Encoding::Legacy(WhatwgEncoding(encoding)))
        }
    }

    /// Returns the canonical name of this encoding.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf32Le => "UTF-32LE",
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::Ascii => "US-ASCII",
            Encoding::Binary => "BINARY",
            Encoding::Legacy(legacy) => legacy.get().name(),
        }
    }

    /// Returns `true` if bytes `0x00..=0x7F` mean ASCII in this encoding.
    ///
    /// Only text in an ASCII-compatible encoding has a textual form that can
    /// be compared against ASCII tokens such as `"true"` or `"1"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::Encoding;
    ///
    /// assert!(Encoding::Utf8.is_ascii_compatible());
    /// assert!(Encoding::for_label("latin1").unwrap().is_ascii_compatible());
    /// assert!(!Encoding::Utf16Be.is_ascii_compatible());
    /// ```
    #[must_use]
    pub fn is_ascii_compatible(&self) -> bool {
        match self {
            Encoding::Utf8 | Encoding::Ascii | Encoding::Binary => true,
            Encoding::Utf16Le | Encoding::Utf16Be | Encoding::Utf32Le | Encoding::Utf32Be => false,
            Encoding::Legacy(legacy) => legacy.get().is_ascii_compatible(),
        }
    }

    /// Returns `true` if the meaning of a byte depends on escape sequences
    /// seen earlier in the stream.
    #[must_use]
    pub fn is_stateful(&self) -> bool {
        matches!(self, Encoding::Legacy(legacy) if legacy.get() == encoding_rs::ISO_2022_JP)
    }

    /// Encodes `s` into this encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unencodable`] naming the first character that has no
    /// representation in this encoding.
    pub fn encode(&self, s: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(s.as_bytes().to_vec()),
            Encoding::Utf16Le => Ok(s.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Encoding::Utf16Be => Ok(s.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Encoding::Utf32Le => Ok(s.chars().flat_map(|c| (c as u32).to_le_bytes()).collect()),
            Encoding::Utf32Be => Ok(s.chars().flat_map(|c| (c as u32).to_be_bytes()).collect()),
            Encoding::Ascii | Encoding::Binary => match s.chars().find(|c| !c.is_ascii()) {
                Some(c) => Err(Error::unencodable(c, self.name())),
                None => Ok(s.as_bytes().to_vec()),
            },
            Encoding::Legacy(legacy) => {
                let encoding = legacy.get();
                let (bytes, _, had_errors) = encoding.encode(s);
                if !had_errors {
                    return Ok(bytes.into_owned());
                }
                let mut buf = [0u8; 4];
                let offending = s
                    .chars()
                    .find(|c| encoding.encode(c.encode_utf8(&mut buf)).2)
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(Error::unencodable(offending, self.name()))
            }
        }
    }

    /// Encodes a single character, returning `None` when it is unrepresentable.
    pub(crate) fn encode_char(&self, c: char) -> Option<Vec<u8>> {
        let mut buf = [0u8; 4];
        self.encode(c.encode_utf8(&mut buf)).ok()
    }

    /// Decodes `bytes` without replacement, returning `None` on malformed input.
    #[must_use]
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Encoding::Utf16Le => {
                encoding_rs::UTF_16LE.decode_without_bom_handling_and_without_replacement(bytes)
            }
            Encoding::Utf16Be => {
                encoding_rs::UTF_16BE.decode_without_bom_handling_and_without_replacement(bytes)
            }
            Encoding::Utf32Le => decode_utf32(bytes, u32::from_le_bytes),
            Encoding::Utf32Be => decode_utf32(bytes, u32::from_be_bytes),
            Encoding::Ascii | Encoding::Binary => {
                if bytes.is_ascii() {
                    std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
                } else {
                    None
                }
            }
            Encoding::Legacy(legacy) => legacy
                .get()
                .decode_without_bom_handling_and_without_replacement(bytes),
        }
    }
}

fn decode_utf32(bytes: &[u8], read: fn([u8; 4]) -> u32) -> Option<Cow<'_, str>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    bytes
        .chunks_exact(4)
        .map(|chunk| char::from_u32(read([chunk[0], chunk[1], chunk[2], chunk[3]])))
        .collect::<Option<String>>()
        .map(Cow::Owned)
}

impl PartialEq for Encoding {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Encoding {}

impl Hash for Encoding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Utf8
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A byte string tagged with its [`Encoding`].
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{Encoding, Text};
///
/// let text = Text::encode("\u{3000}", Encoding::for_label("shift_jis").unwrap()).unwrap();
/// assert_eq!(text.as_bytes(), &[0x81, 0x40]);
/// assert!(!text.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Text {
    bytes: Vec<u8>,
    encoding: Encoding,
}

impl Text {
    /// Creates UTF-8 text.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Text {
            bytes: s.into().into_bytes(),
            encoding: Encoding::Utf8,
        }
    }

    /// Encodes `s` into `encoding`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unencodable`] if `s` contains a character the encoding cannot represent.
    pub fn encode(s: &str, encoding: Encoding) -> Result<Self> {
        Ok(Text {
            bytes: encoding.encode(s)?,
            encoding,
        })
    }

    /// Wraps raw bytes that are already in `encoding`. The bytes are not validated.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, encoding: Encoding) -> Self {
        Text {
            bytes: bytes.into(),
            encoding,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns `true` if the text holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Decodes the text, returning `None` if the bytes are malformed for its encoding.
    #[must_use]
    pub fn decode(&self) -> Option<Cow<'_, str>> {
        self.encoding.decode(&self.bytes)
    }

    /// Borrows the text as `&str` when it is valid UTF-8 text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.encoding {
            Encoding::Utf8 => std::str::from_utf8(&self.bytes).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some(s) => f.write_str(&s),
            None => write!(f, "<{} bytes of {}>", self.bytes.len(), self.encoding),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::new(value)
    }
}
