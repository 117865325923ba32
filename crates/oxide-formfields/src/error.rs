//! Error types for field registration, binding and validation.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field with the same name is already registered.
    #[error("duplicate field name: {0}")]
    DuplicateField(String),

    /// Submitted input could not be interpreted for a field.
    #[error("invalid value for field {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// No field is registered under this name.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Cleaned data could not be serialized.
    #[error("failed to serialize cleaned data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The reason a single validator (or a field conversion) rejected a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Adds every message for a field, keeping their order.
    pub fn extend(&mut self, field: &str, messages: &[String]) {
        if messages.is_empty() {
            return;
        }
        self.errors
            .entry(field.to_string())
            .or_default()
            .extend(messages.iter().cloned());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns all errors as a flat list, sorted by field name. Messages of
    /// one field keep their order.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        fields
            .into_iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.all_errors() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
