//! Configuration options for form serialization.
//!
//! [`Options`] selects the output shape and which otherwise-skipped controls
//! are included:
//!
//! - `hash`: produce a nested [`Value`](crate::Value) instead of a query string
//! - `disabled`: include disabled controls
//! - `empty`: include empty text fields, unchecked checkboxes and radio groups
//!   with no selection, using placeholder values
//!
//! ## Examples
//!
//! ```rust
//! use form_serialize::{serialize, Control, Form, Options, Serialized};
//!
//! let form = Form::new(vec![Control::text("q", "")]);
//!
//! // Empty fields are skipped by default
//! assert_eq!(serialize(Some(&form), &Options::new()), Serialized::Query(String::new()));
//!
//! // ...and kept with `empty`
//! let options = Options::new().with_empty(true);
//! assert_eq!(serialize(Some(&form), &options), Serialized::Query("q=".to_string()));
//! ```

/// Configuration options for form serialization.
///
/// All flags default to `false`: string output, disabled and empty controls
/// skipped.
///
/// # Examples
///
/// ```rust
/// use form_serialize::Options;
///
/// let options = Options::hash().with_disabled(true).with_empty(true);
/// assert!(options.hash);
/// assert!(options.disabled);
/// assert!(options.empty);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub hash: bool,
    pub disabled: bool,
    pub empty: bool,
}

impl Options {
    /// Creates default options (query-string output, skip disabled and empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_serialize::Options;
    ///
    /// let options = Options::new();
    /// assert!(!options.hash);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for nested (hash) output.
    #[must_use]
    pub fn hash() -> Self {
        Options {
            hash: true,
            ..Default::default()
        }
    }

    /// Selects nested output when `hash` is `true`, query-string output otherwise.
    #[must_use]
    pub fn with_hash(mut self, hash: bool) -> Self {
        self.hash = hash;
        self
    }

    /// Includes disabled controls when `disabled` is `true`.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Includes valueless controls with placeholder values when `empty` is `true`.
    ///
    /// Empty text fields become `""`, unchecked checkboxes `false`, and a radio
    /// group with nothing checked contributes `""` once.
    #[must_use]
    pub fn with_empty(mut self, empty: bool) -> Self {
        self.empty = empty;
        self
    }
}
