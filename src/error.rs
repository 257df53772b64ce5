//! Error types for typed form extraction.
//!
//! Serializing a form never fails: malformed names and conflicting shapes
//! degrade to a best-effort result. Errors only arise when a serialized form
//! is deserialized into a Rust type with [`from_form`](crate::from_form) or
//! [`from_value`](crate::from_value) and the data does not fit that type.
//!
//! ## Examples
//!
//! ```rust
//! use form_serialize::{from_value, Error, Value};
//!
//! let result: Result<u32, Error> = from_value(Value::from("twelve"));
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during typed extraction.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The value has a different shape than the target type expects
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A field's text could not be parsed as the requested number type
    #[error("Invalid number {text:?}: expected {expected}")]
    InvalidNumber { text: String, expected: String },

    /// Custom error raised by a `Deserialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error describing the value that was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_serialize::{Error, Value};
    ///
    /// let err = Error::type_mismatch("bool", &Value::from("yes"));
    /// assert!(err.to_string().contains("expected bool"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &crate::Value) -> Self {
        let found = match found {
            crate::Value::Bool(b) => format!("boolean `{}`", b),
            crate::Value::String(s) => format!("string {:?}", s),
            crate::Value::Array(arr) => format!("array of {} elements", arr.len()),
            crate::Value::Object(_) => "object".to_string(),
        };
        Error::TypeMismatch {
            expected: expected.to_string(),
            found,
        }
    }

    /// Creates an error for text that does not parse as a number.
    pub fn invalid_number(text: &str, expected: &str) -> Self {
        Error::InvalidNumber {
            text: text.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
