//! Numeric field kinds.

use super::single_non_blank;
use crate::error::ValidationError;
use crate::field::{BaseField, Field};
use crate::instance::FieldInstance;
use crate::value::Value;
use crate::widgets::{TextInput, Widget};

/// A whole-number field. Blank input cleans to nil.
#[derive(Debug)]
pub struct IntegerField {
    base: BaseField,
}

impl IntegerField {
    /// Creates an integer field named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseField::new(name),
        }
    }
}

base_field_builders!(IntegerField);

impl Field for IntegerField {
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
            Some(v) => v
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ValidationError::new("Enter a whole number.")),
        }
    }

    fn render_default(&self, field: &FieldInstance<'_>) -> String {
        TextInput::with_type("number").render(field)
    }
}

/// A floating point field. Blank input cleans to nil; NaN and infinities
/// are rejected.
#[derive(Debug)]
pub struct FloatField {
    base: BaseField,
}

impl FloatField {
    /// Creates a float field named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseField::new(name),
        }
    }
}

base_field_builders!(FloatField);

impl Field for FloatField {
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
            Some(v) => match v.parse::<f64>() {
                Ok(num) if num.is_finite() => Ok(Value::Float(num)),
                _ => Err(ValidationError::new("Enter a number.")),
            },
        }
    }

    fn render_default(&self, field: &FieldInstance<'_>) -> String {
        TextInput::with_type("number")
            .attr("step", "any")
            .render(field)
    }
}
