//! The form model: a read-only snapshot of a form's controls.
//!
//! Serialization never touches a live DOM. Hosts describe each control with a
//! [`Control`] (what `element.name`, `element.type`, `element.disabled`,
//! `element.checked`, `element.value` and `select.options` would report) and
//! hand an ordered collection of them to the serializer through the
//! [`FormModel`] trait.
//!
//! Snapshots deserialize from JSON, so a page script can collect them and a
//! Rust service can serialize them:
//!
//! ```rust
//! use form_serialize::{Control, ControlKind, Form};
//!
//! let form = Form::new(vec![
//!     Control::text("user[name]", "fred"),
//!     Control::checkbox("user[admin]", None, true),
//! ]);
//! assert_eq!(form.controls[1].kind, ControlKind::Checkbox);
//! ```

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Source of controls for one serialization call.
///
/// Implementations must yield controls in document order.
pub trait FormModel {
    fn controls(&self) -> &[Control];
}

/// The kind of a form control, as reported by the DOM `type` property.
///
/// # Examples
///
/// ```rust
/// use form_serialize::ControlKind;
///
/// assert_eq!("CHECKBOX".parse::<ControlKind>().unwrap(), ControlKind::Checkbox);
/// assert_eq!("select-multiple".parse::<ControlKind>().unwrap(), ControlKind::SelectMultiple);
/// // Unknown input types behave like text, as browsers do
/// assert_eq!("week".parse::<ControlKind>().unwrap(), ControlKind::Text);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ControlKind {
    #[default]
    Text,
    Textarea,
    Checkbox,
    Radio,
    SelectOne,
    SelectMultiple,
    Submit,
    Button,
    Reset,
    Image,
    File,
    /// Listed in `form.elements` but never submitted (fieldset, object, output).
    Other,
}

impl ControlKind {
    /// Returns the DOM `type` tag for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Textarea => "textarea",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Radio => "radio",
            ControlKind::SelectOne => "select-one",
            ControlKind::SelectMultiple => "select-multiple",
            ControlKind::Submit => "submit",
            ControlKind::Button => "button",
            ControlKind::Reset => "reset",
            ControlKind::Image => "image",
            ControlKind::File => "file",
            ControlKind::Other => "other",
        }
    }

    /// Returns `true` for kinds that never contribute a value.
    #[must_use]
    pub const fn is_submitter(&self) -> bool {
        matches!(
            self,
            ControlKind::Submit
                | ControlKind::Button
                | ControlKind::Reset
                | ControlKind::Image
                | ControlKind::File
                | ControlKind::Other
        )
    }

    /// Returns `true` for kinds whose value comes from `value` verbatim.
    #[must_use]
    pub const fn is_text_like(&self) -> bool {
        matches!(self, ControlKind::Text | ControlKind::Textarea)
    }
}

impl FromStr for ControlKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "textarea" => ControlKind::Textarea,
            "checkbox" => ControlKind::Checkbox,
            "radio" => ControlKind::Radio,
            "select" | "select-one" => ControlKind::SelectOne,
            "select-multiple" => ControlKind::SelectMultiple,
            "submit" => ControlKind::Submit,
            "button" => ControlKind::Button,
            "reset" => ControlKind::Reset,
            "image" => ControlKind::Image,
            "file" => ControlKind::File,
            "fieldset" | "object" | "output" | "other" => ControlKind::Other,
            _ => ControlKind::Text,
        };
        Ok(kind)
    }
}

impl From<String> for ControlKind {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<ControlKind> for String {
    fn from(kind: ControlKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<option>` of a select control.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    /// The `value` attribute, `None` when the element has none.
    pub value: Option<String>,
    /// Text content, used as the value when the attribute is absent.
    pub text: String,
    pub selected: bool,
}

impl SelectOption {
    /// An option with an explicit `value` attribute; its text mirrors the value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        SelectOption {
            text: value.clone(),
            value: Some(value),
            selected: false,
        }
    }

    /// An option without a `value` attribute.
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        SelectOption {
            value: None,
            text: text.into(),
            selected: false,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Shorthand for `with_selected(true)`.
    #[must_use]
    pub fn selected(self) -> Self {
        self.with_selected(true)
    }

    /// Returns `true` when the option carries a `value` attribute.
    #[must_use]
    pub fn has_explicit_value(&self) -> bool {
        self.value.is_some()
    }

    /// The value the option submits: the attribute, or the text content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_serialize::SelectOption;
    ///
    /// assert_eq!(SelectOption::new("de").with_text("German").effective_value(), "de");
    /// assert_eq!(SelectOption::text_only("Default value").effective_value(), "Default value");
    /// ```
    #[must_use]
    pub fn effective_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.text)
    }
}

/// A snapshot of one form control.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Control {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ControlKind,
    pub disabled: bool,
    pub checked: bool,
    /// The `value` attribute (or current value for text-like controls).
    pub value: Option<String>,
    /// Options of a select control, in document order.
    pub options: Vec<SelectOption>,
}

impl Control {
    /// A control of `kind` with no value.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ControlKind) -> Self {
        Control {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// A text input.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Control::new(name, ControlKind::Text).with_value(value)
    }

    /// A textarea.
    #[must_use]
    pub fn textarea(name: impl Into<String>, value: impl Into<String>) -> Self {
        Control::new(name, ControlKind::Textarea).with_value(value)
    }

    /// A checkbox, with or without a `value` attribute.
    #[must_use]
    pub fn checkbox(name: impl Into<String>, value: Option<&str>, checked: bool) -> Self {
        Control {
            value: value.map(str::to_string),
            checked,
            ..Control::new(name, ControlKind::Checkbox)
        }
    }

    /// A radio button.
    #[must_use]
    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Control {
            checked,
            ..Control::new(name, ControlKind::Radio).with_value(value)
        }
    }

    /// A single-choice select.
    #[must_use]
    pub fn select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Control {
            options,
            ..Control::new(name, ControlKind::SelectOne)
        }
    }

    /// A `<select multiple>`.
    #[must_use]
    pub fn select_multiple(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Control {
            options,
            ..Control::new(name, ControlKind::SelectMultiple)
        }
    }

    /// A submit button.
    #[must_use]
    pub fn submit(name: impl Into<String>, value: impl Into<String>) -> Self {
        Control::new(name, ControlKind::Submit).with_value(value)
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// An owned form snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub controls: Vec<Control>,
}

impl Form {
    #[must_use]
    pub fn new(controls: Vec<Control>) -> Self {
        Form { controls }
    }

    /// Appends a control after the existing ones.
    pub fn push(&mut self, control: Control) {
        self.controls.push(control);
    }

    /// Builder-style [`push`](Form::push).
    #[must_use]
    pub fn with(mut self, control: Control) -> Self {
        self.push(control);
        self
    }
}

impl FromIterator<Control> for Form {
    fn from_iter<T: IntoIterator<Item = Control>>(iter: T) -> Self {
        Form::new(iter.into_iter().collect())
    }
}

impl FormModel for Form {
    fn controls(&self) -> &[Control] {
        &self.controls
    }
}

impl FormModel for [Control] {
    fn controls(&self) -> &[Control] {
        self
    }
}

impl FormModel for Vec<Control> {
    fn controls(&self) -> &[Control] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("Radio".parse::<ControlKind>().unwrap(), ControlKind::Radio);
        assert_eq!("SUBMIT".parse::<ControlKind>().unwrap(), ControlKind::Submit);
        assert_eq!("email".parse::<ControlKind>().unwrap(), ControlKind::Text);
        assert_eq!("fieldset".parse::<ControlKind>().unwrap(), ControlKind::Other);
    }

    #[test]
    fn test_kind_round_trips_through_tag() {
        for kind in [
            ControlKind::Text,
            ControlKind::Textarea,
            ControlKind::Checkbox,
            ControlKind::Radio,
            ControlKind::SelectOne,
            ControlKind::SelectMultiple,
            ControlKind::Submit,
            ControlKind::Button,
            ControlKind::Reset,
            ControlKind::Image,
            ControlKind::File,
            ControlKind::Other,
        ] {
            assert_eq!(ControlKind::from(kind.to_string()), kind);
        }
    }

    #[test]
    fn test_submitters() {
        assert!(ControlKind::Image.is_submitter());
        assert!(ControlKind::File.is_submitter());
        assert!(!ControlKind::Checkbox.is_submitter());
    }

    #[test]
    fn test_effective_value() {
        assert_eq!(SelectOption::text_only("Bar").effective_value(), "Bar");
        assert!(!SelectOption::text_only("Bar").has_explicit_value());
        assert_eq!(SelectOption::new("").with_text("Empty").effective_value(), "");
    }

    #[test]
    fn test_builders() {
        let control = Control::checkbox("foo", Some("bar"), true).with_disabled(true);
        assert_eq!(control.kind, ControlKind::Checkbox);
        assert_eq!(control.value.as_deref(), Some("bar"));
        assert!(control.checked);
        assert!(control.disabled);

        let form: Form = vec![Control::text("a", "1")].into_iter().collect();
        assert_eq!(form.controls().len(), 1);
    }
}
