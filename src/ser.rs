//! Serde bridge into [`Value`].
//!
//! [`ValueSerializer`] turns any `T: Serialize` into a [`Value`] so that
//! deserialized configuration, form payloads or JSON documents can be fed
//! straight into the coercions.
//!
//! ## Mapping
//!
//! | Serde data model | Value |
//! |---|---|
//! | `bool` | `Bool` |
//! | integers | `Number::Integer`, or `Number::BigInt` beyond `i64` |
//! | floats | `Number::Float` |
//! | `char`, `str` | `String` (UTF-8) |
//! | bytes | `String` tagged [`Encoding::Binary`] |
//! | `None`, unit, unit struct | `Null` |
//! | unit variant | `Symbol` |
//! | sequences, tuples | `Array` |
//! | maps, structs | `Object` |
//!
//! Newtype, tuple and struct variants are rejected with
//! [`Error::UnsupportedType`].
//!
//! ## Examples
//!
//! ```rust
//! use semantic_bool::{to_env_bool, to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! enum Mode { Enabled }
//!
//! #[derive(Serialize)]
//! struct Flags { verbose: &'static str, mode: Mode, retries: Option<u8> }
//!
//! let flags = to_value(&Flags { verbose: "yes", mode: Mode::Enabled, retries: None }).unwrap();
//! let flags = flags.as_object().unwrap();
//! assert!(to_env_bool(flags.get("verbose").unwrap()));
//! assert_eq!(flags.get("mode"), Some(&Value::symbol("Enabled")));
//! assert_eq!(flags.get("retries"), Some(&Value::Null));
//! ```

use crate::{Encoding, Error, Result, Text, Value, ValueMap};
use serde::{ser, Serialize};

/// Serializer producing a [`Value`] tree.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: ValueMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<Value, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::String(Text::from_bytes(v, Encoding::Binary)))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::symbol(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn with_capacity(capacity: usize) -> Self {
        SerializeMap {
            map: ValueMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::Symbol(name) => name,
            Value::String(text) => match text.as_str() {
                Some(s) => s.to_string(),
                None => return Err(Error::custom("Map keys must be UTF-8 strings")),
            },
            other => {
                return Err(Error::custom(format!(
                    "Map keys must be strings, got {}",
                    other.type_name()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for enum variants carrying data, and
/// [`Error::Custom`] for maps whose keys are not strings.
///
/// # Examples
///
/// ```rust
/// use semantic_bool::{is_blank, to_value};
///
/// let tags: Vec<String> = Vec::new();
/// assert!(is_blank(&to_value(&tags).unwrap()).unwrap());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;
    use num_bigint::BigInt;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    enum Shape {
        Dot,
        Circle(f64),
        Line(i32, i32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_struct_becomes_object() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("x"), Some(&Value::Number(Number::Integer(1))));
        assert_eq!(object.keys().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn test_large_unsigned_promotes_to_big_int() {
        assert_eq!(
            to_value(&u64::MAX).unwrap(),
            Value::Number(Number::BigInt(BigInt::from(u64::MAX)))
        );
        assert_eq!(to_value(&7u64).unwrap(), Value::Number(Number::Integer(7)));
    }

    #[test]
    fn test_small_u128_stays_an_integer() {
        assert_eq!(to_value(&5u128).unwrap(), Value::from(5u64));
        assert_eq!(to_value(&5u128).unwrap(), to_value(&5i128).unwrap());
        assert_eq!(
            to_value(&u128::MAX).unwrap(),
            Value::Number(Number::BigInt(BigInt::from(u128::MAX)))
        );
    }

    #[test]
    fn test_bytes_are_binary_text() {
        let value = to_value(&Bytes(&[0x20, 0x09])).unwrap();
        let text = value.as_text().unwrap();
        assert_eq!(text.encoding(), Encoding::Binary);
        assert_eq!(text.as_bytes(), &[0x20, 0x09]);
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(to_value(&Shape::Dot).unwrap(), Value::symbol("Dot"));
        let rejected = [
            Shape::Circle(1.0),
            Shape::Line(0, 1),
            Shape::Rect { w: 1, h: 1 },
        ];
        for shape in rejected {
            assert!(matches!(to_value(&shape), Err(Error::UnsupportedType(_))));
        }
    }

    #[test]
    fn test_non_string_keys_are_rejected() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        assert!(matches!(to_value(&map), Err(Error::Custom(_))));
    }

    #[test]
    fn test_option_and_unit() {
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(false)).unwrap(), Value::Bool(false));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
    }

    struct Bytes<'a>(&'a [u8]);

    impl Serialize for Bytes<'_> {
        fn serialize<S: ser::Serializer>(
            &self,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            serializer.serialize_bytes(self.0)
        }
    }
}
