//! Field validators.
//!
//! A validator sees the bound field and the whole form instance, so rules
//! that compare sibling fields are ordinary validators too. Apart from
//! [`RequiredValidator`], validators accept empty input; pair them with
//! `RequiredValidator` to reject blanks.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::form::FormInstance;
use crate::instance::FieldInstance;
use crate::value::Value;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Checks the field's current value, returning the failure reason.
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        form: &FormInstance<'_>,
    ) -> Result<(), ValidationError>;
}

/// The text a string validator should look at: the cleaned text when there
/// is one, the raw string otherwise.
fn text_of<'f>(field: &'f FieldInstance<'_>) -> &'f str {
    match &field.v().value {
        Value::Text(s) => s,
        _ => &field.v().raw_str,
    }
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self::with_message("This field is required.")
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        _: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        let v = field.v();
        let missing = match &v.value {
            Value::Nil => v.is_blank(),
            Value::Text(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Bool(checked) => !checked,
            Value::Integer(_) | Value::Float(_) => false,
        };
        if missing {
            Err(ValidationError::new(&*self.message))
        } else {
            Ok(())
        }
    }
}

/// Validator that enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Creates a new MaxLengthValidator with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        _: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        if text_of(field).chars().count() > self.max_length {
            Err(ValidationError::new(&*self.message))
        } else {
            Ok(())
        }
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        _: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        let text = text_of(field);
        if !text.is_empty() && text.chars().count() < self.min_length {
            Err(ValidationError::new(&*self.message))
        } else {
            Ok(())
        }
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("valid email pattern")
});

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self::with_message("Enter a valid email address.")
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        _: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        let text = text_of(field);
        if text.is_empty() || EMAIL_RE.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::new(&*self.message))
        }
    }
}

/// Validator for http(s) URLs.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new UrlValidator with default message.
    pub fn new() -> Self {
        Self::with_message("Enter a valid URL.")
    }

    /// Creates a new UrlValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        _: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        let text = text_of(field);
        let host = text
            .strip_prefix("https://")
            .or_else(|| text.strip_prefix("http://"));
        match host {
            _ if text.is_empty() => Ok(()),
            Some(rest) if !rest.is_empty() => Ok(()),
            _ => Err(ValidationError::new(&*self.message)),
        }
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        _: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        let text = text_of(field);
        if text.is_empty() || self.pattern.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::new(&*self.message))
        }
    }
}

/// Validator for numeric range.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl RangeValidator {
    /// Creates a new RangeValidator with min and max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("Value must be between {min} and {max}."),
            (Some(min), None) => format!("Value must be at least {min}."),
            (None, Some(max)) => format!("Value must be at most {max}."),
            (None, None) => "Invalid value.".to_string(),
        };
        Self { min, max, message }
    }

    /// Creates a new RangeValidator with custom message.
    pub fn with_message(min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator for RangeValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        _: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        let num = match field.v().value.as_f64() {
            Some(num) => num,
            None => {
                let raw = field.v().raw_str.trim();
                if raw.is_empty() {
                    return Ok(());
                }
                raw.parse::<f64>()
                    .map_err(|_| ValidationError::new("Enter a valid number."))?
            }
        };

        if self.min.is_some_and(|min| num < min) || self.max.is_some_and(|max| num > max) {
            return Err(ValidationError::new(&*self.message));
        }
        Ok(())
    }
}

/// Validator requiring the field to repeat another field's raw input,
/// e.g. a password confirmation.
#[derive(Debug, Clone)]
pub struct EqualToValidator {
    other: String,
    message: String,
}

impl EqualToValidator {
    /// Creates a validator comparing against the field named `other`.
    pub fn new(other: impl Into<String>) -> Self {
        let other = other.into();
        Self {
            message: format!("Must match {other}."),
            other,
        }
    }

    /// Creates a new EqualToValidator with custom message.
    pub fn with_message(other: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            message: message.into(),
        }
    }
}

impl Validator for EqualToValidator {
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        form: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        let matches = form
            .get(&self.other)
            .is_some_and(|other| other.v().raw_values == field.v().raw_values);
        if matches {
            Ok(())
        } else {
            Err(ValidationError::new(&*self.message))
        }
    }
}

/// Adapts a closure into a validator.
pub struct FnValidator<F> {
    f: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&FieldInstance<'_>, &FormInstance<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> std::fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&FieldInstance<'_>, &FormInstance<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(
        &self,
        field: &FieldInstance<'_>,
        form: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        (self.f)(field, form)
    }
}
