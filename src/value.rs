//! Dynamic value representation for coercion input.
//!
//! This module provides the [`Value`] enum, the one input type every coercion
//! rule accepts. Values arrive from environment variables, form fields,
//! deserialized config or legacy records, so their shape is only known at
//! runtime.
//!
//! ## Core Types
//!
//! - [`Value`]: absent, boolean, number, text, symbol, array, map, set, temporal, or object
//! - [`Number`]: machine integers, big integers and floats
//! - [`Temporal`]: timestamps, calendar dates and naive date-times
//! - [`Object`]: the capability surface for caller-defined types
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use semantic_bool::{Value, Text, Encoding};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let symbol = Value::symbol("on");
//! let wide = Value::from(Text::encode("yes", Encoding::Utf16Le).unwrap());
//! let missing: Value = None::<i32>.into();
//! assert!(missing.is_null());
//! ```
//!
//! ### Custom Objects
//!
//! Caller-defined types join through [`Object`]. They opt into capabilities by
//! answering the interface queries; everything they leave unanswered falls
//! back to the default rules.
//!
//! ```rust
//! use semantic_bool::{is_blank, Blank, Object, Value};
//!
//! #[derive(Debug)]
//! struct Draft { body: String }
//!
//! impl Blank for Draft {
//!     fn is_blank(&self) -> bool {
//!         self.body.trim().is_empty()
//!     }
//! }
//!
//! impl Object for Draft {
//!     fn type_name(&self) -> &str { "Draft" }
//!     fn as_blank(&self) -> Option<&dyn Blank> { Some(self) }
//! }
//!
//! let draft = Value::custom(Draft { body: "  ".to_string() });
//! assert!(is_blank(&draft).unwrap());
//! ```

use crate::{Text, ValueMap, ValueSet};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use num_bigint::{BigInt, Sign};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A dynamically-typed input value.
///
/// The variants form a closed set of categories plus two open arms:
/// [`Value::Custom`] for types that implement [`Object`], and [`Value::Bare`]
/// for values that cannot be asked anything at all.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{Value, Number};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::from("hello");
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(Text),
    Symbol(String),
    Array(Vec<Value>),
    Object(ValueMap),
    Set(ValueSet),
    Temporal(Temporal),
    Custom(Arc<dyn Object>),
    Bare(Arc<dyn Any + Send + Sync>),
}

/// A numeric value.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert!(!float.is_integer());
/// assert!(Number::Integer(0).is_zero_integer());
/// assert!(!Number::Float(0.0).is_zero_integer());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    BigInt(BigInt),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer of any width.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInt(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` for an integer equal to zero.
    ///
    /// Floats are never "integer zero", even `0.0`.
    #[must_use]
    pub fn is_zero_integer(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::BigInt(bi) => bi.sign() == Sign::NoSign,
            Number::Float(_) => false,
        }
    }

    /// Converts this number to an `i64` if it is an integer that fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::BigInt(bi) => i64::try_from(bi).ok(),
            Number::Float(_) => None,
        }
    }
}

/// Floats always render with a fraction or an exponent (`1.0`, `1e20`, `NaN`),
/// so their textual form never reads as an integer.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::BigInt(bi) => write!(f, "{}", bi),
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInt(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A point or span on the calendar. Temporal values are never blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Temporal {
    Time(DateTime<Utc>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Time(dt) => write!(f, "{}", dt.to_rfc3339()),
            Temporal::Date(d) => write!(f, "{}", d),
            Temporal::DateTime(dt) => write!(f, "{}", dt),
        }
    }
}

/// The override hook for blank detection.
///
/// When an object answers [`Object::as_blank`], its answer is used as-is and
/// none of the default rules run.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

/// The emptiness-length capability: a container that knows its size.
pub trait Length {
    fn length(&self) -> usize;
}

/// A caller-defined value.
///
/// Capabilities are discovered through the `as_*` interface queries rather
/// than required by the trait, so an implementation only answers the queries
/// it supports.
pub trait Object: fmt::Debug + Send + Sync {
    /// Name used in error messages and the default textual form.
    fn type_name(&self) -> &str;

    /// Textual form used by env-style coercion. `None` means the value has none.
    fn to_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn as_blank(&self) -> Option<&dyn Blank> {
        None
    }

    fn as_length(&self) -> Option<&dyn Length> {
        None
    }
}

impl Value {
    /// Wraps a caller-defined object.
    pub fn custom<T: Object + 'static>(object: T) -> Self {
        Value::Custom(Arc::new(object))
    }

    /// Wraps an arbitrary value that exposes no capabilities at all.
    pub fn bare<T: Any + Send + Sync>(value: T) -> Self {
        Value::Bare(Arc::new(value))
    }

    /// Creates a symbolic label.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Returns `true` if the value is the absent marker.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Value::Temporal(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semantic_bool::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is valid UTF-8 text, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => s.as_str(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Describes the category of this value for error messages.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Set(_) => "set",
            Value::Temporal(_) => "temporal",
            Value::Custom(obj) => obj.type_name(),
            Value::Bare(_) => "bare object",
        }
    }

    /// The textual form env-style coercion reads, or `None` if the value has none.
    ///
    /// Absent values read as the empty string. Text in an encoding that is not
    /// ASCII-compatible, or whose bytes do not decode, has no textual form.
    pub(crate) fn textual(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => Some(Cow::Borrowed("")),
            Value::String(text) if text.encoding().is_ascii_compatible() => text.decode(),
            Value::String(_) => None,
            Value::Symbol(name) => Some(Cow::Borrowed(name)),
            Value::Custom(obj) => obj.to_text(),
            Value::Bare(_) => None,
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Temporal(a), Value::Temporal(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            (Value::Bare(a), Value::Bare(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Value::Object(obj) => {
                write!(
                    f,
                    "{{{}}}",
                    obj.iter()
                        .map(|(k, v)| format!("{}: {}", k, v))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Value::Set(set) => {
                write!(
                    f,
                    "#{{{}}}",
                    set.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Value::Temporal(t) => write!(f, "{}", t),
            Value::Custom(obj) => match obj.to_text() {
                Some(text) => f.write_str(&text),
                None => write!(f, "#<{}>", obj.type_name()),
            },
            Value::Bare(_) => f.write_str("#<bare object>"),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Number(Number::BigInt(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Text::new(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Text::new(value))
    }
}

impl From<Text> for Value {
    fn from(value: Text) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Object(value)
    }
}

impl From<ValueSet> for Value {
    fn from(value: ValueSet) -> Self {
        Value::Set(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Temporal(Temporal::Time(value))
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Temporal(Temporal::Date(value))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Temporal(Temporal::DateTime(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
