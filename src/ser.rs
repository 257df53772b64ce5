//! Form serialization.
//!
//! This module walks a form's controls in document order and folds each
//! eligible `(name, value)` pair into one of three outputs:
//!
//! - **Hash**: a nested [`Value`] built with [`Tree`] ([`to_value`])
//! - **Query**: an `application/x-www-form-urlencoded` string ([`to_string`])
//! - **Custom**: a caller-supplied [`Fold`] ([`serialize_with`])
//!
//! ```rust
//! use form_serialize::{to_string, to_value, form_value, Control, Form, Options};
//!
//! let form = Form::new(vec![
//!     Control::text("account[name]", "Foo Dude"),
//!     Control::text("account[city]", "Qux"),
//! ]);
//!
//! assert_eq!(
//!     to_string(Some(&form), &Options::new()),
//!     "account%5Bname%5D=Foo+Dude&account%5Bcity%5D=Qux"
//! );
//! assert_eq!(
//!     to_value(Some(&form), &Options::new()),
//!     form_value!({"account": {"name": "Foo Dude", "city": "Qux"}})
//! );
//! ```

use crate::assign::Tree;
use crate::extract::{extract, Extracted};
use crate::filter::{self, RadioGroups, Skip};
use crate::form::FormModel;
use crate::{Options, Value};

/// Suffix marking a name as an array in bracket notation.
const ARRAY_SUFFIX: &str = "[]";

/// The result of [`serialize`](crate::serialize), shaped by `Options::hash`.
#[derive(Clone, Debug, PartialEq)]
pub enum Serialized {
    Hash(Value),
    Query(String),
}

impl Serialized {
    /// Returns the nested value in hash mode.
    #[must_use]
    pub fn as_hash(&self) -> Option<&Value> {
        match self {
            Serialized::Hash(value) => Some(value),
            Serialized::Query(_) => None,
        }
    }

    /// Returns the query string in string mode.
    #[must_use]
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Serialized::Query(query) => Some(query),
            Serialized::Hash(_) => None,
        }
    }
}

/// A custom fold over the eligible `(name, value)` pairs of a form.
///
/// Any `FnMut(Value, &str, Value) -> Value` closure is a `Fold`.
///
/// # Examples
///
/// ```rust
/// use form_serialize::{serialize_with, Control, Form, Options, Value};
///
/// let form = Form::new(vec![Control::text("a", "1"), Control::text("b", "2")]);
/// let names = serialize_with(Some(&form), &Options::new(), |acc: Value, name: &str, _value: Value| {
///     let mut names = match acc {
///         Value::Array(names) => names,
///         _ => Vec::new(),
///     };
///     names.push(Value::from(name));
///     Value::Array(names)
/// });
/// assert_eq!(names, Value::Array(vec![Value::from("a"), Value::from("b")]));
/// ```
pub trait Fold {
    /// Folds one pair into the accumulator and returns the new accumulator.
    fn fold(&mut self, acc: Value, name: &str, value: Value) -> Value;
}

impl<F> Fold for F
where
    F: FnMut(Value, &str, Value) -> Value,
{
    fn fold(&mut self, acc: Value, name: &str, value: Value) -> Value {
        self(acc, name, value)
    }
}

/// How multi-select names are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Naming {
    /// The control name as written, one pair per selected option.
    Flat,
    /// Names get a trailing `[]` so a single selection still nests as an array.
    Nested,
}

/// Returns the eligible pairs of `form` in document order.
///
/// Names are as written on the controls; a missing form yields no pairs.
///
/// # Examples
///
/// ```rust
/// use form_serialize::{entries, Control, Form, Options, Value};
///
/// let form = Form::new(vec![
///     Control::checkbox("remember", None, true),
///     Control::text("q", "rust"),
/// ]);
/// assert_eq!(
///     entries(Some(&form), &Options::new()),
///     vec![
///         ("remember".to_string(), Value::from(true)),
///         ("q".to_string(), Value::from("rust")),
///     ]
/// );
/// ```
#[must_use]
pub fn entries<F>(form: Option<&F>, options: &Options) -> Vec<(String, Value)>
where
    F: FormModel + ?Sized,
{
    collect(form, options, Naming::Flat)
}

fn collect<F>(form: Option<&F>, options: &Options, naming: Naming) -> Vec<(String, Value)>
where
    F: FormModel + ?Sized,
{
    let Some(form) = form else {
        log::trace!("no form given; serializing zero controls");
        return Vec::new();
    };

    let mut pairs = Vec::new();
    let mut radios = RadioGroups::new();

    for control in form.controls() {
        if let Err(skip) = filter::screen(control, options, &mut radios) {
            log::trace!("skipping control {:?}: {}", control.name, skip);
            continue;
        }

        match extract(control, options) {
            Extracted::Single(value) => {
                if filter::admits(&value, options) {
                    pairs.push((control.name.clone(), value));
                } else {
                    log::trace!("skipping control {:?}: {}", control.name, Skip::EmptyValue);
                }
            }
            Extracted::Selection(values) => {
                let name = match naming {
                    Naming::Nested if !control.name.ends_with(ARRAY_SUFFIX) => {
                        format!("{}{}", control.name, ARRAY_SUFFIX)
                    }
                    _ => control.name.clone(),
                };
                pairs.extend(values.into_iter().map(|value| (name.clone(), value)));
            }
        }
    }

    if options.empty {
        for name in radios.unanswered() {
            log::trace!("radio group {:?} has no checked member; using \"\"", name);
            pairs.push((name.to_string(), Value::from("")));
        }
    }

    pairs
}

/// Serializes `form` into the output selected by `options.hash`.
///
/// # Examples
///
/// ```rust
/// use form_serialize::{serialize, form_value, Control, Form, Options, Serialized};
///
/// let form = Form::new(vec![Control::text("foo", "bar")]);
///
/// assert_eq!(serialize(Some(&form), &Options::new()), Serialized::Query("foo=bar".to_string()));
/// assert_eq!(serialize(Some(&form), &Options::hash()), Serialized::Hash(form_value!({"foo": "bar"})));
/// ```
#[must_use]
pub fn serialize<F>(form: Option<&F>, options: &Options) -> Serialized
where
    F: FormModel + ?Sized,
{
    if options.hash {
        log::trace!("serializing form into a nested value");
        Serialized::Hash(to_value(form, options))
    } else {
        log::trace!("serializing form into a query string");
        Serialized::Query(to_string(form, options))
    }
}

/// Serializes `form` into a nested [`Value`], ignoring `options.hash`.
///
/// Bracket names nest (`a[b]`, `a[]`, `a[0]`), repeated names accumulate into
/// arrays, and an empty or missing form yields an empty object.
#[must_use]
pub fn to_value<F>(form: Option<&F>, options: &Options) -> Value
where
    F: FormModel + ?Sized,
{
    let mut tree = Tree::new();
    for (name, value) in collect(form, options, Naming::Nested) {
        tree.insert(&name, value);
    }
    tree.into_value()
}

/// Serializes `form` into a urlencoded query string, ignoring `options.hash`.
///
/// Pairs are joined with `&`; spaces become `+` and every byte outside
/// `A-Za-z0-9*-._` is percent-encoded, in names as well as values. Line breaks
/// in values are normalized to `\r\n`. An empty or missing form yields `""`.
#[must_use]
pub fn to_string<F>(form: Option<&F>, options: &Options) -> String
where
    F: FormModel + ?Sized,
{
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in collect(form, options, Naming::Flat) {
        if let Some(text) = value.to_query_text() {
            query.append_pair(&name, &normalize_newlines(&text));
        }
    }
    query.finish()
}

/// Folds the eligible pairs of `form` with a custom [`Fold`].
///
/// The accumulator starts as an empty object and the fold's final return
/// value is the result. Names are those hash mode would use, so multi-selects
/// arrive as `name[]`; a multi-valued control invokes the fold once per value.
///
/// # Examples
///
/// ```rust
/// use form_serialize::{serialize_with, form_value, Control, Form, Options, Value};
///
/// let form = Form::new(vec![Control::text("node", "zuul")]);
/// let result = serialize_with(Some(&form), &Options::new(), |acc: Value, name: &str, _v: Value| {
///     let mut map = match acc {
///         Value::Object(map) => map,
///         _ => Default::default(),
///     };
///     map.insert(name.to_string(), Value::from("ZUUL"));
///     Value::Object(map)
/// });
/// assert_eq!(result, form_value!({"node": "ZUUL"}));
/// ```
pub fn serialize_with<F, S>(form: Option<&F>, options: &Options, mut serializer: S) -> Value
where
    F: FormModel + ?Sized,
    S: Fold,
{
    collect(form, options, Naming::Nested)
        .into_iter()
        .fold(Value::default(), |acc, (name, value)| {
            serializer.fold(acc, &name, value)
        })
}

/// Rewrites lone `\r` and `\n` as `\r\n`.
fn normalize_newlines(text: &str) -> String {
    if !text.contains(|c: char| c == '\r' || c == '\n') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\r\n");
            }
            '\n' => out.push_str("\r\n"),
            _ => out.push(ch),
        }
    }
    out
}
