//! Presentational class names of the text input.
//!
//! Stylesheets key off these tokens; the control itself never reads them
//! back.

use crate::model::FieldState;

pub const BASE: &str = "text-input";
pub const CONTAINER: &str = "text-input--container";
pub const ACTIVE: &str = "text-input--active";
pub const FOCUS: &str = "text-input--focus";
pub const HAS_LABEL: &str = "text-input--has-label";
pub const SUCCESS: &str = "text-input--success";
pub const ERROR: &str = "text-input--error";
pub const FIELD: &str = "text-input--field";
pub const LABEL: &str = "text-input--label";

/// Host-declared configuration the class set depends on.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassInputs<'a> {
    pub value: &'a str,
    pub default_value: &'a str,
    pub label: Option<&'a str>,
    pub class_name: Option<&'a str>,
}

impl ClassInputs<'_> {
    /// The declared value, falling back to the default value when empty.
    fn effective_value(&self) -> &str {
        if self.value.is_empty() {
            self.default_value
        } else {
            self.value
        }
    }
}

/// Runs `validate` on `value`; a missing validator accepts everything.
pub fn is_valid(validate: Option<&dyn Fn(&str) -> bool>, value: &str) -> bool {
    validate.is_none_or(|validate| validate(value))
}

/// Builds the space-separated class list in the fixed order
/// base, active, focus, has-label, validation.
///
/// Validation classes only appear when the value is non-empty and a
/// validator is supplied; the validator always sees the declared `value`,
/// not whatever the DOM currently holds.
pub fn class_names(
    state: &FieldState,
    inputs: &ClassInputs<'_>,
    validate: Option<&dyn Fn(&str) -> bool>,
) -> String {
    let has_value = !inputs.effective_value().is_empty();

    let mut classes = vec![BASE, CONTAINER, inputs.class_name.unwrap_or_default()];

    if state.focus || has_value {
        classes.push(ACTIVE);
    }
    if state.focus {
        classes.push(FOCUS);
    }
    if inputs.label.is_some_and(|label| !label.is_empty()) {
        classes.push(HAS_LABEL);
    }
    if has_value && validate.is_some() {
        classes.push(if is_valid(validate, inputs.value) {
            SUCCESS
        } else {
            ERROR
        });
    }

    classes
        .into_iter()
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
