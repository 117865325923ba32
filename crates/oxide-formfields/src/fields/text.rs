//! Free-text field kind and its common shapes.

use super::single;
use crate::error::ValidationError;
use crate::field::{BaseField, Field};
use crate::instance::FieldInstance;
use crate::validation::{
    EmailValidator, MaxLengthValidator, MinLengthValidator, RequiredValidator, UrlValidator,
};
use crate::value::Value;
use crate::widgets::{BootstrapTextInput, BootstrapTextarea, TextInput, Widget};

/// A single-valued text field.
#[derive(Debug)]
pub struct TextField {
    base: BaseField,
}

impl TextField {
    /// Creates a text field named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseField::new(name),
        }
    }
}

base_field_builders!(TextField);

impl Field for TextField {
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
        Ok(single(raw)?.map_or(Value::Nil, |v| Value::Text(v.to_string())))
    }

    fn render_default(&self, field: &FieldInstance<'_>) -> String {
        TextInput::new().render(field)
    }
}

/// Creates a character field (text input with max length).
pub fn char_field(name: &str, label: &str, max_length: usize, required: bool) -> TextField {
    let mut field = TextField::new(name)
        .label(label)
        .widget(BootstrapTextInput::new().attr("maxlength", max_length.to_string()));

    if required {
        field = field.validator(RequiredValidator::new());
    }

    field.validator(MaxLengthValidator::new(max_length))
}

/// Creates a text field (textarea).
pub fn text_field(name: &str, label: &str, rows: usize, required: bool) -> TextField {
    let mut field = TextField::new(name)
        .label(label)
        .widget(BootstrapTextarea::new(rows));

    if required {
        field = field.validator(RequiredValidator::new());
    }

    field
}

/// Creates an email field.
pub fn email_field(name: &str, label: &str, required: bool) -> TextField {
    let mut field = TextField::new(name)
        .label(label)
        .widget(BootstrapTextInput::email());

    if required {
        field = field.validator(RequiredValidator::new());
    }

    field.validator(EmailValidator::new())
}

/// Creates a password field. Passwords are always required.
pub fn password_field(name: &str, label: &str, min_length: Option<usize>) -> TextField {
    let mut field = TextField::new(name)
        .label(label)
        .widget(BootstrapTextInput::password())
        .validator(RequiredValidator::new());

    if let Some(min) = min_length {
        field = field.validator(MinLengthValidator::new(min));
    }

    field
}

/// Creates a URL field.
pub fn url_field(name: &str, label: &str, required: bool) -> TextField {
    let mut field = TextField::new(name)
        .label(label)
        .widget(BootstrapTextInput::url().placeholder("https://"));

    if required {
        field = field.validator(RequiredValidator::new());
    }

    field.validator(UrlValidator::new())
}
