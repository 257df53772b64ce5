//! Dynamic value representation for serialized forms.
//!
//! This module provides the [`Value`] enum, the nested structure produced by
//! hash-mode serialization. A form field is either a string or a boolean
//! (checkboxes without a `value` attribute), and bracket notation nests those
//! scalars inside arrays and objects.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use form_serialize::{form_value, Value};
//!
//! let flag = Value::from(true);
//! let text = Value::from("hello");
//!
//! let obj = form_value!({
//!     "name": "Alice",
//!     "tags": ["a", "b"]
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use form_serialize::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from("42");
//! let text: String = String::try_from(value).unwrap();
//! assert_eq!(text, "42");
//! ```

use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of a serialized form.
///
/// # Examples
///
/// ```rust
/// use form_serialize::{Map, Value};
///
/// let mut address = Map::new();
/// address.insert("city".to_string(), Value::from("Qux"));
///
/// let value = Value::Object(address);
/// assert!(value.is_object());
/// assert_eq!(value.get("city").and_then(Value::as_str), Some("Qux"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Default for Value {
    /// The empty object, which is what serializing an empty form yields.
    fn default() -> Self {
        Value::Object(Map::new())
    }
}

impl Value {
    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for strings and booleans.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::String(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_serialize::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from("true").as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up `key` when the value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Returns the text used for this value in a query string.
    ///
    /// Scalars render as themselves (`true`/`false` for booleans); containers
    /// have no query-string form and yield `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_serialize::Value;
    ///
    /// assert_eq!(Value::from(false).to_query_text().as_deref(), Some("false"));
    /// assert_eq!(Value::from("a b").to_query_text().as_deref(), Some("a b"));
    /// assert_eq!(Value::Array(vec![]).to_query_text(), None);
    /// ```
    #[must_use]
    pub fn to_query_text(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", escape(s)),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(obj) => {
                write!(
                    f,
                    "{{{}}}",
                    obj.iter()
                        .map(|(k, v)| format!("\"{}\":{}", escape(k), v))
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
        }
    }
}

/// Escapes backslashes and quotes for [`Value`]'s `Display` output.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, boolean, array or object")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            // Numbers have no form representation other than their text.
            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::String(String::new()))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::String(String::new()))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::type_mismatch("bool", &value)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::type_mismatch("string", &value)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Array(arr) => Ok(arr),
            _ => Err(crate::Error::type_mismatch("array", &value)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_bool() {
        let result: bool = TryFrom::try_from(Value::Bool(true)).unwrap();
        assert!(result);

        assert!(bool::try_from(Value::from("true")).is_err());
    }

    #[test]
    fn test_tryfrom_string() {
        let result: String = TryFrom::try_from(Value::from("hello")).unwrap();
        assert_eq!(result, "hello");

        assert!(String::try_from(Value::Bool(false)).is_err());
    }

    #[test]
    fn test_default_is_empty_object() {
        assert_eq!(Value::default(), Value::Object(Map::new()));
    }

    #[test]
    fn test_display_nested() {
        let mut map = Map::new();
        map.insert(
            "foo".to_string(),
            Value::Array(vec![Value::from("a"), Value::from(false)]),
        );
        assert_eq!(Value::Object(map).to_string(), r#"{"foo":["a",false]}"#);
    }

    #[test]
    fn test_display_escapes_quotes_and_backslashes() {
        assert_eq!(Value::from("a\\\"").to_string(), r#""a\\\"""#);

        let mut map = Map::new();
        map.insert("k\"".to_string(), Value::from("\\"));
        assert_eq!(Value::Object(map).to_string(), r#"{"k\"":"\\"}"#);
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_scalar(v: &Value) -> bool {
            v.is_scalar()
        }

        assert!(check_scalar(&Value::Bool(true)));
        assert!(!check_scalar(&Value::Array(vec![])));
    }
}
