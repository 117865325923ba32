//! Concrete field kinds and helpers for common field shapes.

use crate::error::ValidationError;

/// Builder methods every field kind forwards to its [`BaseField`].
///
/// [`BaseField`]: crate::field::BaseField
macro_rules! base_field_builders {
    ($kind:ty) => {
        impl $kind {
            /// Sets an explicit label.
            #[must_use]
            pub fn label(mut self, label: impl Into<String>) -> Self {
                self.base = self.base.label(label);
                self
            }

            /// Sets the description (help text).
            #[must_use]
            pub fn description(mut self, description: impl Into<String>) -> Self {
                self.base = self.base.description(description);
                self
            }

            /// Hides the label when rendering.
            #[must_use]
            pub fn hide_label(mut self) -> Self {
                self.base = self.base.hide_label();
                self
            }

            /// Sets the raw value every new instance starts with.
            #[must_use]
            pub fn initial(mut self, initial: impl Into<String>) -> Self {
                self.base = self.base.initial(initial);
                self
            }

            /// Appends a validator.
            #[must_use]
            pub fn validator(
                mut self,
                validator: impl $crate::validation::Validator + 'static,
            ) -> Self {
                self.base = self.base.validator(validator);
                self
            }

            /// Assigns a widget.
            #[must_use]
            pub fn widget(mut self, widget: impl $crate::widgets::Widget + 'static) -> Self {
                self.base = self.base.widget(widget);
                self
            }
        }
    };
}

mod checkbox;
mod hidden;
mod numeric;
mod select;
mod text;

pub use checkbox::{boolean_field, checkbox_field, BooleanField};
pub use hidden::hidden_field;
pub use numeric::{FloatField, IntegerField};
pub use select::{choice_field, multiple_choice_field, ChoiceField, MultipleChoiceField};
pub use text::{char_field, email_field, password_field, text_field, url_field, TextField};

/// Returns the single submitted value, `None` when nothing was submitted.
fn single(raw: Option<&[String]>) -> Result<Option<&str>, ValidationError> {
    match raw {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value.as_str())),
        Some(values) => Err(ValidationError::new(format!(
            "Expected a single value, got {}.",
            values.len()
        ))),
    }
}

/// Like [`single`], treating whitespace-only input as not submitted.
fn single_non_blank(raw: Option<&[String]>) -> Result<Option<&str>, ValidationError> {
    Ok(single(raw)?.map(str::trim).filter(|v| !v.is_empty()))
}

fn invalid_choice(value: &str) -> ValidationError {
    ValidationError::new(format!(
        "Select a valid choice. {value} is not one of the available choices."
    ))
}

fn owned_choices(choices: Vec<(&str, &str)>) -> Vec<(String, String)> {
    choices
        .into_iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect()
}
