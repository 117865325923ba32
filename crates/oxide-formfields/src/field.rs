//! Field definitions and the ordered, name-indexed definitions registry.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{FormError, Result, ValidationError};
use crate::instance::FieldInstance;
use crate::validation::Validator;
use crate::value::Value;
use crate::widgets::Widget;

/// Static metadata shared by every field kind.
pub struct BaseField {
    name: String,
    description: String,
    label: Option<String>,
    hide_label: bool,
    initial: Option<String>,
    validators: Vec<Box<dyn Validator>>,
    widget: Option<Box<dyn Widget>>,
}

impl std::fmt::Debug for BaseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseField")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("label", &self.label)
            .field("hide_label", &self.hide_label)
            .field("initial", &self.initial)
            .field("validators", &self.validators.len())
            .field("widget", &self.widget.as_ref().map(|w| w.input_type()))
            .finish()
    }
}

impl BaseField {
    /// Creates a field definition with no label override, no widget and
    /// no validators.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            label: None,
            hide_label: false,
            initial: None,
            validators: Vec::new(),
            widget: None,
        }
    }

    /// Sets an explicit label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description (help text).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Hides the label when rendering.
    #[must_use]
    pub fn hide_label(mut self) -> Self {
        self.hide_label = true;
        self
    }

    /// Sets the raw value every new instance starts with.
    #[must_use]
    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    /// Appends a validator. Validators run in the order they are added.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Assigns a widget.
    #[must_use]
    pub fn widget(mut self, widget: impl Widget + 'static) -> Self {
        self.widget = Some(Box::new(widget));
        self
    }

    /// Returns the field name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the description, empty when unset.
    pub fn get_description(&self) -> &str {
        &self.description
    }

    /// Resolves the label: hidden gives `""`, an explicit label is returned
    /// verbatim, otherwise the title-cased name.
    pub fn get_label(&self) -> String {
        if self.hide_label {
            return String::new();
        }
        match &self.label {
            Some(label) if !label.is_empty() => label.clone(),
            _ => title_case(&self.name),
        }
    }

    /// Returns the initial raw value.
    pub fn get_initial(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    /// Returns the assigned widget.
    pub fn get_widget(&self) -> Option<&dyn Widget> {
        self.widget.as_deref()
    }

    /// Returns the validators in registration order.
    pub fn get_validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }

    /// Replaces the assigned widget.
    pub fn set_widget(&mut self, widget: Box<dyn Widget>) {
        self.widget = Some(widget);
    }

    /// Appends a validator after construction.
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }
}

/// A field kind: static metadata plus the kind-specific conversion and
/// fallback rendering.
///
/// Implementors only provide the required methods; the metadata accessors
/// forward to [`BaseField`].
pub trait Field: Send + Sync {
    /// Returns the shared metadata.
    fn base(&self) -> &BaseField;

    /// Returns the shared metadata mutably.
    fn base_mut(&mut self) -> &mut BaseField;

    /// Creates a fresh runtime instance bound to this definition.
    fn new_instance(&self) -> FieldInstance<'_>;

    /// Converts the submitted raw values (`None` when the field was not
    /// submitted at all) into this kind's typed value.
    fn clean(&self, raw: Option<&[String]>) -> std::result::Result<Value, ValidationError>;

    /// Renders the field when no widget is assigned.
    fn render_default(&self, field: &FieldInstance<'_>) -> String;

    /// Returns the field name.
    fn get_name(&self) -> &str {
        self.base().get_name()
    }

    /// Returns the description.
    fn get_description(&self) -> &str {
        self.base().get_description()
    }

    /// Returns the resolved label.
    fn get_label(&self) -> String {
        self.base().get_label()
    }

    /// Returns the assigned widget.
    fn get_widget(&self) -> Option<&dyn Widget> {
        self.base().get_widget()
    }

    /// Returns the validators in registration order.
    fn get_validators(&self) -> &[Box<dyn Validator>] {
        self.base().get_validators()
    }

    /// Replaces the assigned widget.
    fn set_widget(&mut self, widget: Box<dyn Widget>) {
        self.base_mut().set_widget(widget);
    }

    /// Returns the `(value, label)` pairs offered by choice kinds.
    fn choices(&self) -> &[(String, String)] {
        &[]
    }
}

/// Upper-cases the first letter of every word.
///
/// ASCII characters other than letters, digits and `_` separate words.
/// Beyond ASCII only whitespace does, so `"a\u{2014}b"` stays `"A\u{2014}b"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        !c.is_alphanumeric() && c.is_whitespace()
    }
}

/// Ordered, name-indexed collection of field definitions.
///
/// The list and the index are only ever mutated together in
/// [`Fields::add_field`], so every listed field is indexed and vice versa.
#[derive(Default)]
pub struct Fields {
    list: Vec<Box<dyn Field>>,
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for Fields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Fields {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of definitions.
    ///
    /// Fails on the first name that repeats an earlier one.
    pub fn from_fields(fields: Vec<Box<dyn Field>>) -> Result<Self> {
        let mut registry = Self::new();
        for field in fields {
            let name = field.get_name().to_string();
            if !registry.add_field(field) {
                return Err(FormError::DuplicateField(name));
            }
        }
        Ok(registry)
    }

    /// Registers a definition.
    ///
    /// Returns `false` without touching the registry when the name is
    /// already taken; the first registration for a name wins.
    pub fn add_field(&mut self, field: Box<dyn Field>) -> bool {
        let name = field.get_name();
        if self.index.contains_key(name) {
            warn!(field = name, "field already registered, ignoring");
            return false;
        }
        self.index.insert(name.to_string(), self.list.len());
        self.list.push(field);
        true
    }

    /// Registers a concrete field kind. See [`Fields::add_field`].
    pub fn register(&mut self, field: impl Field + 'static) -> bool {
        self.add_field(Box::new(field))
    }

    /// Returns the definitions in registration order.
    pub fn list(&self) -> &[Box<dyn Field>] {
        &self.list
    }

    /// Looks a definition up by exact name.
    pub fn get(&self, name: &str) -> Option<&dyn Field> {
        self.index.get(name).map(|&i| self.list[i].as_ref())
    }

    /// Looks a definition up by exact name for deferred setup such as
    /// assigning widgets.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Field + 'static)> {
        let i = *self.index.get(name)?;
        Some(self.list[i].as_mut())
    }

    /// Returns the field names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.list.iter().map(|f| f.get_name())
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
