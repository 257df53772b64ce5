//! # form_serialize
//!
//! Serialize the controls of an HTML form into a urlencoded query string or a
//! nested structure, the way a browser would submit them, with bracket
//! notation for nesting (`account[address][city]`) and arrays (`tags[]`).
//!
//! The crate does not read a DOM. Hosts describe the form as an ordered list
//! of [`Control`]s (a [`Form`], or any [`FormModel`]) and the serializer
//! applies the usual submission rules: buttons and file inputs are skipped,
//! disabled controls are skipped, unchecked checkboxes and radios are
//! skipped, empty values are skipped. [`Options`] can keep disabled and empty
//! controls.
//!
//! ## Quick Start
//!
//! ```rust
//! use form_serialize::{serialize, form_value, Control, Form, Options, Serialized, SelectOption};
//!
//! let form = Form::new(vec![
//!     Control::text("account[name]", "Foo Dude"),
//!     Control::checkbox("account[admin]", None, true),
//!     Control::select_multiple(
//!         "account[roles]",
//!         vec![
//!             SelectOption::new("dev").selected(),
//!             SelectOption::new("ops"),
//!             SelectOption::new("qa").selected(),
//!         ],
//!     ),
//!     Control::submit("save", "Save"),
//! ]);
//!
//! // Query string (the default)
//! assert_eq!(
//!     serialize(Some(&form), &Options::new()),
//!     Serialized::Query(
//!         "account%5Bname%5D=Foo+Dude&account%5Badmin%5D=true\
//!          &account%5Broles%5D=dev&account%5Broles%5D=qa"
//!             .to_string()
//!     )
//! );
//!
//! // Nested structure
//! assert_eq!(
//!     serialize(Some(&form), &Options::hash()),
//!     Serialized::Hash(form_value!({
//!         "account": {"name": "Foo Dude", "admin": true, "roles": ["dev", "qa"]}
//!     }))
//! );
//! ```
//!
//! ## Bracket Notation
//!
//! | Names | Result |
//! |-------|--------|
//! | `a[b][c]` | `{"a": {"b": {"c": ..}}}` |
//! | `a[]` (repeated) | `{"a": [.., ..]}` |
//! | `a[1][x]`, `a[0][x]`, `a[][x]` | `{"a": [{"x": ..}, {"x": ..}, {"x": ..}]}` in index order, `[]` after the highest index |
//! | `a` (repeated) | `{"a": [.., ..]}` |
//! | `[][x]` | `{"_values": [{"x": ..}]}` |
//!
//! See [`assign`] for how conflicting names are resolved.
//!
//! ## Typed Extraction
//!
//! ```rust
//! use form_serialize::{from_form, Control, Form, Options};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Search { q: String, page: u32 }
//!
//! let form = Form::new(vec![Control::text("q", "rust"), Control::text("page", "2")]);
//! let search: Search = from_form(Some(&form), &Options::new()).unwrap();
//! assert_eq!(search.page, 2);
//! ```
//!
//! ## Logging
//!
//! Skipped controls and shape conflicts are reported through the `log`
//! facade at `trace` and `debug` level.

pub mod assign;
pub mod de;
pub mod error;
pub mod extract;
pub mod filter;
pub mod form;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod ser;
pub mod value;

pub use assign::{Tree, VALUES_KEY};
pub use de::from_value;
pub use error::{Error, Result};
pub use form::{Control, ControlKind, Form, FormModel, SelectOption};
pub use map::Map;
pub use options::Options;
pub use ser::{entries, serialize, serialize_with, to_string, to_value, Fold, Serialized};
pub use value::Value;

use serde::de::DeserializeOwned;

/// Serializes `form` in hash mode and deserializes the result into `T`.
///
/// `options.hash` is ignored; `disabled` and `empty` apply as usual.
///
/// # Examples
///
/// ```rust
/// use form_serialize::{from_form, Control, Form, Options};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Person { name: String, age: Option<u8> }
///
/// let form = Form::new(vec![Control::text("name", "bob"), Control::text("age", "")]);
///
/// let person: Person = from_form(Some(&form), &Options::new().with_empty(true)).unwrap();
/// assert_eq!(person, Person { name: "bob".to_string(), age: None });
/// ```
///
/// # Errors
///
/// Returns an error if the serialized form does not fit `T`.
pub fn from_form<T, F>(form: Option<&F>, options: &Options) -> Result<T>
where
    T: DeserializeOwned,
    F: FormModel + ?Sized,
{
    from_value(to_value(form, options))
}
