//! Runtime field instances bound to one form binding.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{FormError, Result};
use crate::field::{Field, Fields};
use crate::form::FormInstance;
use crate::value::{Data, Value, V};
use crate::widgets::Widget;

/// The bound counterpart of a field definition.
///
/// Metadata reads go back to the definition; the raw value and the error
/// list belong to this instance alone.
pub struct FieldInstance<'a> {
    model: &'a dyn Field,
    v: V,
    errors: Vec<String>,
    cleaned: bool,
    clean_failed: bool,
}

impl std::fmt::Debug for FieldInstance<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldInstance")
            .field("name", &self.name())
            .field("v", &self.v)
            .field("errors", &self.errors)
            .finish()
    }
}

impl<'a> FieldInstance<'a> {
    /// Creates an instance with no errors, seeded with the definition's
    /// initial value if it has one.
    pub fn new(model: &'a dyn Field) -> Self {
        let v = model
            .base()
            .get_initial()
            .map(V::from_raw)
            .unwrap_or_default();
        Self::with_value(model, v)
    }

    /// Creates an instance seeded with a value holder.
    pub fn with_value(model: &'a dyn Field, v: V) -> Self {
        Self {
            model,
            v,
            errors: Vec::new(),
            cleaned: false,
            clean_failed: false,
        }
    }

    /// Returns the definition this instance was created from.
    pub fn model(&self) -> &'a dyn Field {
        self.model
    }

    /// Returns the field name.
    pub fn name(&self) -> &'a str {
        self.model.get_name()
    }

    /// Returns the resolved label, see [`crate::BaseField::get_label`].
    pub fn label(&self) -> String {
        self.model.get_label()
    }

    /// Returns the description, empty when unset.
    pub fn description(&self) -> &'a str {
        self.model.get_description()
    }

    /// Returns the widget assigned to the definition.
    pub fn widget(&self) -> Option<&'a dyn Widget> {
        self.model.get_widget()
    }

    /// Returns the raw value holder.
    pub fn v(&self) -> &V {
        &self.v
    }

    /// Overwrites the raw value without validating it. Any previously
    /// cleaned value is dropped since it no longer matches the raw input.
    pub fn set_initial(&mut self, raw: impl Into<String>) {
        self.v = V::from_raw(raw);
        self.cleaned = false;
        self.clean_failed = false;
    }

    /// Returns whether the current raw value has been converted, either
    /// successfully or not.
    pub fn is_cleaned(&self) -> bool {
        self.cleaned
    }

    /// Returns whether converting the current raw value failed.
    pub fn clean_failed(&self) -> bool {
        self.clean_failed
    }

    /// Pulls this field's values out of `data` and converts them.
    ///
    /// The raw values are kept even when conversion fails so the widget
    /// can redisplay what the user typed.
    pub fn clean(&mut self, data: &dyn Data) -> Result<()> {
        let raw = data.values(self.name());
        self.v.raw_values = raw.clone().unwrap_or_default();
        self.v.raw_str = self.v.raw_values.first().cloned().unwrap_or_default();
        self.convert(raw.as_deref())
    }

    /// Converts the raw values the instance already holds, e.g. after
    /// [`FieldInstance::set_initial`].
    pub fn reclean(&mut self) -> Result<()> {
        let raw = std::mem::take(&mut self.v.raw_values);
        let result = self.convert(Some(&raw));
        self.v.raw_values = raw;
        result
    }

    fn convert(&mut self, raw: Option<&[String]>) -> Result<()> {
        self.cleaned = true;
        match self.model.clean(raw) {
            Ok(value) => {
                self.v.value = value;
                self.clean_failed = false;
                Ok(())
            }
            Err(err) => {
                debug!(field = self.name(), error = %err, "clean failed");
                self.v.value = Value::Nil;
                self.clean_failed = true;
                Err(FormError::InvalidValue {
                    field: self.name().to_string(),
                    message: err.to_string(),
                })
            }
        }
    }

    /// Runs every validator in registration order and returns one message
    /// per failure. All validators run even after a failure.
    pub fn validate(&self, form: &FormInstance<'_>) -> Vec<String> {
        let validators = self.model.get_validators();
        if validators.is_empty() {
            return Vec::new();
        }
        validators
            .iter()
            .filter_map(|validator| match validator.validate(self, form) {
                Ok(()) => None,
                Err(err) => {
                    trace!(field = self.name(), error = %err, "validator failed");
                    Some(err.to_string())
                }
            })
            .collect()
    }

    /// Returns the accumulated error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Replaces the error messages wholesale.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    /// Returns whether any error is recorded.
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders this field through its widget, or the field kind's fallback
    /// when no widget is assigned.
    pub fn html(&self) -> String {
        render_field(self)
    }
}

/// Rendering dispatch: the assigned widget when there is one, the field
/// kind's own markup otherwise.
pub fn render_field(field: &FieldInstance<'_>) -> String {
    match field.widget() {
        Some(widget) => widget.render(field),
        None => field.model().render_default(field),
    }
}

/// One instance per definition, in definition order, addressable by name.
///
/// Membership is fixed at construction.
#[derive(Debug)]
pub struct FieldInstances<'a> {
    list: Vec<FieldInstance<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> FieldInstances<'a> {
    /// Instantiates every definition of `fields`.
    pub fn new(fields: &'a Fields) -> Self {
        let mut list = Vec::with_capacity(fields.len());
        let mut index = HashMap::with_capacity(fields.len());
        for field in fields.list() {
            let field: &'a dyn Field = field.as_ref();
            index.insert(field.get_name(), list.len());
            list.push(field.new_instance());
        }
        Self { list, index }
    }

    /// Returns the instances in definition order.
    pub fn list(&self) -> &[FieldInstance<'a>] {
        &self.list
    }

    /// Looks an instance up by exact name.
    pub fn get(&self, name: &str) -> Option<&FieldInstance<'a>> {
        self.index.get(name).map(|&i| &self.list[i])
    }

    /// Looks an instance up by exact name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldInstance<'a>> {
        let i = *self.index.get(name)?;
        self.list.get_mut(i)
    }

    /// Iterates the instances in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldInstance<'a>> {
        self.list.iter()
    }

    /// Iterates the instances mutably in definition order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, FieldInstance<'a>> {
        self.list.iter_mut()
    }

    /// Returns the number of instances.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns whether there are no instances.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
