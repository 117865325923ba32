#![allow(dead_code)]

use oxide_formfields::validation::Validator;
use oxide_formfields::{FieldInstance, FormInstance, ValidationError};

/// A validator with a fixed outcome.
pub struct Fixed(pub Option<&'static str>);

impl Fixed {
    pub fn fails(message: &'static str) -> Self {
        Self(Some(message))
    }

    pub fn passes() -> Self {
        Self(None)
    }
}

impl Validator for Fixed {
    fn validate(
        &self,
        _field: &FieldInstance<'_>,
        _form: &FormInstance<'_>,
    ) -> Result<(), ValidationError> {
        match self.0 {
            Some(message) => Err(ValidationError::new(message)),
            None => Ok(()),
        }
    }
}

/// Collects the names of a form instance's fields in order.
pub fn field_names<'a>(form: &'a FormInstance<'_>) -> Vec<&'a str> {
    form.fields().iter().map(FieldInstance::name).collect()
}
