//! Forms: a definitions registry plus per-binding instances.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;
use tracing::debug;

use crate::error::{FormError, Result, ValidationErrors};
use crate::field::{Field, Fields};
use crate::instance::{FieldInstance, FieldInstances};
use crate::value::Data;
use crate::widgets::field_id;

/// A form definition. Build it once and share it; every request binds its
/// own [`FormInstance`].
#[derive(Debug, Default)]
pub struct Form {
    fields: Fields,
}

impl Form {
    /// Creates a form over an existing registry.
    pub fn new(fields: Fields) -> Self {
        Self { fields }
    }

    /// Starts a [`FormBuilder`].
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Returns the field definitions.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Returns the field definitions for setup, e.g. assigning widgets.
    pub fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    /// Creates an unbound instance holding only initial values.
    pub fn instance(&self) -> FormInstance<'_> {
        FormInstance::new(self)
    }

    /// Creates an instance bound to submitted data, cleaned and validated.
    pub fn bind(&self, data: &dyn Data) -> FormInstance<'_> {
        let mut instance = FormInstance::new(self);
        instance.bind(data);
        instance
    }
}

/// A simple form builder for creating forms programmatically.
#[derive(Default)]
pub struct FormBuilder {
    fields: Vec<Box<dyn Field>>,
}

impl std::fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.fields.iter().map(|field| field.get_name()))
            .finish()
    }
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: impl Field + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }

    /// Builds the form, failing if two fields share a name.
    pub fn build(self) -> Result<Form> {
        Fields::from_fields(self.fields).map(Form::new)
    }
}

/// One binding of a [`Form`]: a fresh set of field instances holding the
/// submitted values and their errors.
#[derive(Debug)]
pub struct FormInstance<'a> {
    form: &'a Form,
    fields: FieldInstances<'a>,
    bound: bool,
}

impl<'a> FormInstance<'a> {
    /// Instantiates every field of `form`.
    pub fn new(form: &'a Form) -> Self {
        Self {
            form,
            fields: FieldInstances::new(form.fields()),
            bound: false,
        }
    }

    /// Returns the form this instance was created from.
    pub fn form(&self) -> &'a Form {
        self.form
    }

    /// Returns the field instances.
    pub fn fields(&self) -> &FieldInstances<'a> {
        &self.fields
    }

    /// Looks a field instance up by name.
    pub fn get(&self, name: &str) -> Option<&FieldInstance<'a>> {
        self.fields.get(name)
    }

    /// Looks a field instance up by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldInstance<'a>> {
        self.fields.get_mut(name)
    }

    /// Seeds a field's raw value.
    pub fn set_initial(&mut self, name: &str, raw: impl Into<String>) -> Result<()> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_initial(raw);
        Ok(())
    }

    /// Cleans every field from `data`, then validates the fields that
    /// cleaned successfully. A clean failure becomes that field's only
    /// error.
    pub fn bind(&mut self, data: &dyn Data) {
        for field in self.fields.iter_mut() {
            let result = field.clean(data);
            record_clean(field, result);
        }
        self.bound = true;
        self.run_validators();
    }

    /// Converts every value replaced since the last clean, then re-runs the
    /// validators of every field whose value cleaned, replacing their
    /// errors. Returns whether no field has errors.
    pub fn validate(&mut self) -> bool {
        for field in self.fields.iter_mut().filter(|f| !f.is_cleaned()) {
            let result = field.reclean();
            record_clean(field, result);
        }
        self.run_validators();
        !self.has_errors()
    }

    fn run_validators(&mut self) {
        // Validators see the whole form, so collect first and store after.
        let form: &FormInstance<'a> = self;
        let results: Vec<Option<Vec<String>>> = form
            .fields
            .iter()
            .map(|field| (!field.clean_failed()).then(|| field.validate(form)))
            .collect();

        for (field, errors) in self.fields.iter_mut().zip(results) {
            if let Some(errors) = errors {
                field.set_errors(errors);
            }
        }

        debug!(
            fields = self.fields.len(),
            invalid = self.fields.iter().filter(|f| f.has_error()).count(),
            "validated form"
        );
    }

    fn has_errors(&self) -> bool {
        self.fields.iter().any(FieldInstance::has_error)
    }

    /// Returns whether data has been bound.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Returns whether the instance is bound and no field has errors.
    pub fn is_valid(&self) -> bool {
        self.bound && !self.has_errors()
    }

    /// Collects the errors of every field.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in self.fields.iter() {
            errors.extend(field.name(), field.errors());
        }
        errors
    }

    /// Returns the cleaned value of every field without errors, keyed by
    /// field name.
    pub fn cleaned_data(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        let mut data = serde_json::Map::new();
        for field in self.fields.iter().filter(|f| !f.has_error()) {
            data.insert(
                field.name().to_string(),
                serde_json::to_value(&field.v().value)?,
            );
        }
        Ok(data)
    }

    /// Renders one field with Bootstrap 5 layout: label, widget, error
    /// feedback and description.
    pub fn render_field(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(render_row)
    }

    /// Renders the whole form with Bootstrap 5 styling.
    pub fn render(&self, action: &str, method: &str) -> String {
        let mut form = html! {
            form.action(#action).method(#method)
        };

        for field in self.fields.iter() {
            let field_html = render_row(field);
            form = form.child::<Div, _>(|d| d.raw(&field_html));
        }

        form = form.child::<Div, _>(|d| {
            let btn = html! {
                button.type_("submit").class("btn btn-primary") {
                    "Submit"
                }
            };
            d.raw(btn.render())
        });

        form.render()
    }
}

/// A clean failure becomes the field's only error.
fn record_clean(field: &mut FieldInstance<'_>, result: Result<()>) {
    let errors = match result {
        Err(FormError::InvalidValue { message, .. }) => vec![message],
        _ => Vec::new(),
    };
    field.set_errors(errors);
}

fn render_row(field: &FieldInstance<'_>) -> String {
    let widget_html = field.html();
    let input_type = field.widget().map_or("text", |w| w.input_type());
    if input_type == "hidden" {
        return widget_html;
    }

    let id = field_id(field);
    let label_text = field.label();
    // Checkbox widgets carry their own label.
    let show_label = !label_text.is_empty() && input_type != "checkbox";
    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };
    let label_html = label_el.render();
    let description = field.description();

    html! { div.class("mb-3") }
        .when(show_label, |d| d.raw(&label_html))
        .raw(&widget_html)
        .children(field.errors(), |error, div: Element<Div>| {
            div.class("invalid-feedback").text(error)
        })
        .when(!description.is_empty(), |d| {
            d.child::<Div, _>(|h| h.class("form-text").text(description))
        })
        .render()
}
