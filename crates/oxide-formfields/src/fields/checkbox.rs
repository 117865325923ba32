//! Checkbox field kind.

use super::single;
use crate::error::ValidationError;
use crate::field::{BaseField, Field};
use crate::instance::FieldInstance;
use crate::value::Value;
use crate::widgets::{BootstrapCheckbox, CheckboxInput, Widget};

/// A boolean field. Browsers omit unchecked boxes, so a missing value
/// cleans to `false`.
#[derive(Debug)]
pub struct BooleanField {
    base: BaseField,
}

impl BooleanField {
    /// Creates a boolean field named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseField::new(name),
        }
    }
}

base_field_builders!(BooleanField);

impl Field for BooleanField {
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
        let Some(v) = single(raw)? else {
            return Ok(Value::Bool(false));
        };
        match v.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" | "yes" => Ok(Value::Bool(true)),
            "false" | "off" | "0" | "no" | "" => Ok(Value::Bool(false)),
            _ => Err(ValidationError::new("Enter a valid boolean.")),
        }
    }

    fn render_default(&self, field: &FieldInstance<'_>) -> String {
        CheckboxInput.render(field)
    }
}

/// Creates a boolean field (checkbox).
pub fn boolean_field(name: &str, label: &str) -> BooleanField {
    BooleanField::new(name)
        .label(label)
        .widget(BootstrapCheckbox::new())
}

/// Creates a checkbox field, optionally switch-styled.
pub fn checkbox_field(name: &str, label: &str, is_switch: bool) -> BooleanField {
    let widget = if is_switch {
        BootstrapCheckbox::switch()
    } else {
        BootstrapCheckbox::new()
    };

    BooleanField::new(name).label(label).widget(widget)
}
