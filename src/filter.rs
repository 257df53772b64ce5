//! Control eligibility.
//!
//! Decides, per control, whether it takes part in serialization under the
//! active [`Options`]. Gating happens in two steps: [`screen`] looks at the
//! control itself before any value is computed, and [`admits`] looks at the
//! extracted value.
//!
//! | Control | Eligible when |
//! |---|---|
//! | unnamed | never |
//! | submit, button, reset, image, file, other | never |
//! | disabled | `options.disabled` |
//! | unchecked checkbox | `options.empty` (value `false`) |
//! | unchecked radio | never; its group is remembered |
//! | checked radio | first checked member of its group only |
//! | empty string value | `options.empty` |

use crate::form::{Control, ControlKind};
use crate::{Options, Value};
use indexmap::IndexMap;
use std::fmt;

/// Why a control was left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Skip {
    Unnamed,
    Submitter(ControlKind),
    Disabled,
    Unchecked,
    /// Another radio with the same name is already checked.
    RadioGroupAnswered,
    EmptyValue,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Unnamed => f.write_str("control has no name"),
            Skip::Submitter(kind) => write!(f, "{} controls are never serialized", kind),
            Skip::Disabled => f.write_str("control is disabled"),
            Skip::Unchecked => f.write_str("control is not checked"),
            Skip::RadioGroupAnswered => f.write_str("radio group already has a checked member"),
            Skip::EmptyValue => f.write_str("value is empty"),
        }
    }
}

/// Radio groups seen during one pass, in first-seen order.
#[derive(Debug, Default)]
pub struct RadioGroups {
    answered: IndexMap<String, bool>,
}

impl RadioGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn note(&mut self, name: &str, checked: bool) {
        match self.answered.get_mut(name) {
            Some(answered) => *answered |= checked,
            None => {
                self.answered.insert(name.to_string(), checked);
            }
        }
    }

    fn is_answered(&self, name: &str) -> bool {
        self.answered.get(name).copied().unwrap_or(false)
    }

    /// Names of groups where no radio was checked.
    pub fn unanswered(&self) -> impl Iterator<Item = &str> {
        self.answered
            .iter()
            .filter(|(_, answered)| !**answered)
            .map(|(name, _)| name.as_str())
    }
}

/// Gates a control on its name, kind, disabled and checked state.
///
/// Radio buttons are recorded in `radios` whether or not they pass, so that
/// groups without a checked member can be reported once the pass is over.
///
/// # Errors
///
/// Returns the reason the control is excluded.
pub fn screen(
    control: &Control,
    options: &Options,
    radios: &mut RadioGroups,
) -> Result<(), Skip> {
    if control.name.is_empty() {
        return Err(Skip::Unnamed);
    }
    if control.kind.is_submitter() {
        return Err(Skip::Submitter(control.kind.clone()));
    }
    if control.disabled && !options.disabled {
        return Err(Skip::Disabled);
    }

    match control.kind {
        ControlKind::Checkbox if !control.checked && !options.empty => Err(Skip::Unchecked),
        ControlKind::Radio if !control.checked => {
            radios.note(&control.name, false);
            Err(Skip::Unchecked)
        }
        ControlKind::Radio if radios.is_answered(&control.name) => Err(Skip::RadioGroupAnswered),
        ControlKind::Radio => {
            radios.note(&control.name, true);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Gates an extracted value: empty strings pass only under `options.empty`.
#[must_use]
pub fn admits(value: &Value, options: &Options) -> bool {
    match value {
        Value::String(s) => options.empty || !s.is_empty(),
        _ => true,
    }
}
