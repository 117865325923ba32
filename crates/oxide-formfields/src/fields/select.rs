//! Choice field kinds.

use super::{invalid_choice, owned_choices, single_non_blank};
use crate::error::ValidationError;
use crate::field::{BaseField, Field};
use crate::instance::FieldInstance;
use crate::validation::RequiredValidator;
use crate::value::Value;
use crate::widgets::{BootstrapSelect, Select, Widget};

fn is_choice(choices: &[(String, String)], value: &str) -> bool {
    choices.iter().any(|(v, _)| v == value)
}

/// A single choice out of a fixed list.
#[derive(Debug)]
pub struct ChoiceField {
    base: BaseField,
    choices: Vec<(String, String)>,
}

impl ChoiceField {
    /// Creates a choice field from `(value, label)` pairs.
    pub fn new(name: impl Into<String>, choices: Vec<(&str, &str)>) -> Self {
        Self {
            base: BaseField::new(name),
            choices: owned_choices(choices),
        }
    }
}

base_field_builders!(ChoiceField);

impl Field for ChoiceField {
    fn base(&self) -> &BaseField {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseField {
        &mut self.base
    }

    fn new_instance(&self) -> FieldInstance<'_> {
        FieldInstance::new(self)
    }

    fn clean(&self, raw: Option<&[String]>) -> Result<Value, ValidationError> {
        match single_non_blank(raw)? {
            None => Ok(Value::Nil),
            Some(v) if is_choice(&self.choices, v) => Ok(Value::Text(v.to_string())),
            Some(v) => Err(invalid_choice(v)),
        }
    }

    fn render_default(&self, field: &FieldInstance<'_>) -> String {
        Select::new().render(field)
    }

    fn choices(&self) -> &[(String, String)] {
        &self.choices
    }
}

/// Any number of choices out of a fixed list.
#[derive(Debug)]
pub struct MultipleChoiceField {
    base: BaseField,
    choices: Vec<(String, String)>,
}

impl MultipleChoiceField {
    /// Creates a multiple choice field from `(value, label)` pairs.
    pub fn new(name: impl Into<String>, choices: Vec<(&str, &str)>) -> Self {
        Self {
            base: BaseField::new(name),
            choices: owned_choices(choices),
        }
    }
}

base_field_builders!(MultipleChoiceField);

impl Field for MultipleChoiceField {
    fn base(&self) -> &BaseField {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseField {
        &mut self.base
    }

    fn new_instance(&self) -> FieldInstance<'_> {
        FieldInstance::new(self)
    }

    fn clean(&self, raw: Option<&[String]>) -> Result<Value, ValidationError> {
        let Some(raw) = raw else {
            return Ok(Value::Nil);
        };
        let mut selected = Vec::with_capacity(raw.len());
        for value in raw.iter().filter(|v| !v.is_empty()) {
            if !is_choice(&self.choices, value) {
                return Err(invalid_choice(value));
            }
            selected.push(value.clone());
        }
        Ok(Value::List(selected))
    }

    fn render_default(&self, field: &FieldInstance<'_>) -> String {
        Select::multiple().render(field)
    }

    fn choices(&self) -> &[(String, String)] {
        &self.choices
    }
}

/// Creates a choice field (select/dropdown).
pub fn choice_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> ChoiceField {
    let field = ChoiceField::new(name, choices)
        .label(label)
        .widget(BootstrapSelect::new());

    if required {
        field.validator(RequiredValidator::new())
    } else {
        field
    }
}

/// Creates a multiple choice field (multi-select).
pub fn multiple_choice_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> MultipleChoiceField {
    let field = MultipleChoiceField::new(name, choices)
        .label(label)
        .widget(BootstrapSelect::multiple());

    if required {
        field.validator(RequiredValidator::new())
    } else {
        field
    }
}
