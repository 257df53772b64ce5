//! Value extraction for eligible controls.

use crate::form::{Control, ControlKind};
use crate::{Options, Value};

/// Value reported by browsers for a radio button without a `value` attribute.
const DEFAULT_RADIO_VALUE: &str = "on";

/// What a control contributes.
#[derive(Clone, Debug, PartialEq)]
pub enum Extracted {
    /// One value under the control's own name.
    Single(Value),
    /// The selected options of a multi-select, in document order.
    Selection(Vec<Value>),
}

/// Computes the value(s) of a control that passed [`screen`](crate::filter::screen).
///
/// - text-like: `value` verbatim (`""` when absent)
/// - checkbox: `true`/`false` without a `value` attribute; with one, the
///   string when checked and `false` when not
/// - radio: its `value`
/// - select-one: the first selected option; with none selected, the first
///   option's text when it has no `value` attribute, else `""`
/// - select-multiple: every selected option; options with an empty value only
///   under `options.empty`. With nothing selected the control yields `""`
///   under `options.empty` and nothing otherwise.
#[must_use]
pub fn extract(control: &Control, options: &Options) -> Extracted {
    match control.kind {
        ControlKind::Checkbox => Extracted::Single(match (&control.value, control.checked) {
            (None, checked) => Value::Bool(checked),
            (Some(value), true) => Value::from(value.as_str()),
            (Some(_), false) => Value::Bool(false),
        }),
        ControlKind::Radio => Extracted::Single(Value::from(
            control.value.as_deref().unwrap_or(DEFAULT_RADIO_VALUE),
        )),
        ControlKind::SelectOne => {
            let chosen = control
                .options
                .iter()
                .find(|option| option.selected)
                .or_else(|| {
                    control
                        .options
                        .first()
                        .filter(|option| !option.has_explicit_value())
                });
            Extracted::Single(Value::from(
                chosen.map_or("", |option| option.effective_value()),
            ))
        }
        ControlKind::SelectMultiple => {
            let selected: Vec<Value> = control
                .options
                .iter()
                .filter(|option| option.selected)
                .map(|option| option.effective_value())
                .filter(|value| options.empty || !value.is_empty())
                .map(Value::from)
                .collect();
            if selected.is_empty() && options.empty {
                Extracted::Single(Value::from(""))
            } else {
                Extracted::Selection(selected)
            }
        }
        _ => Extracted::Single(Value::from(control.value.as_deref().unwrap_or_default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SelectOption;

    fn single(control: &Control, options: &Options) -> Value {
        match extract(control, options) {
            Extracted::Single(value) => value,
            other => panic!("Expected single value, got {:?}", other),
        }
    }

    #[test]
    fn test_text_value() {
        assert_eq!(
            single(&Control::text("foo", "bar 1"), &Options::new()),
            Value::from("bar 1")
        );
        assert_eq!(
            single(&Control::new("foo", ControlKind::Text), &Options::new()),
            Value::from("")
        );
    }

    #[test]
    fn test_checkbox_values() {
        let options = Options::new().with_empty(true);
        assert_eq!(single(&Control::checkbox("f", None, true), &options), Value::Bool(true));
        assert_eq!(single(&Control::checkbox("f", None, false), &options), Value::Bool(false));
        assert_eq!(
            single(&Control::checkbox("f", Some("baz"), true), &options),
            Value::from("baz")
        );
        assert_eq!(
            single(&Control::checkbox("f", Some("baz"), false), &options),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_radio_without_value_reports_on() {
        let control = Control::new("r", ControlKind::Radio).with_checked(true);
        assert_eq!(single(&control, &Options::new()), Value::from("on"));
    }

    #[test]
    fn test_select_one_prefers_selected() {
        let control = Control::select(
            "foo",
            vec![SelectOption::new("bar"), SelectOption::new("baz").selected()],
        );
        assert_eq!(single(&control, &Options::new()), Value::from("baz"));
    }

    #[test]
    fn test_select_one_falls_back_to_first_option() {
        let control = Control::select(
            "foo",
            vec![SelectOption::text_only("Pick one"), SelectOption::new("baz")],
        );
        assert_eq!(single(&control, &Options::new()), Value::from("Pick one"));

        let control = Control::select("foo", vec![]);
        assert_eq!(single(&control, &Options::new()), Value::from(""));
    }

    #[test]
    fn test_select_one_unselected_with_explicit_values_is_empty() {
        let control = Control::select(
            "foo",
            vec![SelectOption::new("bar"), SelectOption::new("")],
        );
        assert_eq!(single(&control, &Options::new()), Value::from(""));
    }

    #[test]
    fn test_select_multiple_selection() {
        let control = Control::select_multiple(
            "foo",
            vec![
                SelectOption::text_only("Default value").selected(),
                SelectOption::new("").selected(),
                SelectOption::new("baz").selected(),
                SelectOption::new("qux"),
            ],
        );
        assert_eq!(
            extract(&control, &Options::new()),
            Extracted::Selection(vec![Value::from("Default value"), Value::from("baz")])
        );
        assert_eq!(
            extract(&control, &Options::new().with_empty(true)),
            Extracted::Selection(vec![
                Value::from("Default value"),
                Value::from(""),
                Value::from("baz")
            ])
        );
    }

    #[test]
    fn test_select_multiple_nothing_selected() {
        let control = Control::select_multiple("foo", vec![SelectOption::new("bar")]);
        assert_eq!(
            extract(&control, &Options::new()),
            Extracted::Selection(vec![])
        );
        assert_eq!(
            extract(&control, &Options::new().with_empty(true)),
            Extracted::Single(Value::from(""))
        );
    }
}
