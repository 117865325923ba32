//! Form widgets for rendering bound fields as HTML.

mod bootstrap;

pub use bootstrap::{
    BootstrapCheckbox, BootstrapRadioSelect, BootstrapSelect, BootstrapTextInput, BootstrapTextarea,
};

use std::collections::BTreeMap;

use crate::instance::FieldInstance;
use crate::value::Value;

/// Extra attributes applied to a widget, rendered in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Renders the attributes as ` key="value"` pairs, each with a
    /// leading space.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Like [`WidgetAttrs::to_html`] but skipping the given keys.
    pub fn to_html_except(&self, skip: &[&str]) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| !skip.contains(&k.as_str()))
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Trait for widgets that turn a bound field into markup.
pub trait Widget: Send + Sync {
    /// Renders the field. The widget reads the name, current value, label
    /// and errors from `field`.
    fn render(&self, field: &FieldInstance<'_>) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// Returns the element id used for a field.
pub fn field_id(field: &FieldInstance<'_>) -> String {
    format!("id_{}", field.name())
}

/// Renders ` value="..."`, or nothing for an empty raw value.
fn value_attr(field: &FieldInstance<'_>) -> String {
    let raw = &field.v().raw_str;
    if raw.is_empty() {
        String::new()
    } else {
        format!(r#" value="{}""#, html_escape(raw))
    }
}

/// Renders ` class="..."` from the `class` attribute, adding `is-invalid`
/// when the field has errors. Empty when there is no class at all.
fn class_attr(field: &FieldInstance<'_>, attrs: &WidgetAttrs) -> String {
    let mut classes: Vec<&str> = attrs.get("class").map(String::as_str).into_iter().collect();
    if field.has_error() {
        classes.push("is-invalid");
    }
    if classes.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, html_escape(&classes.join(" ")))
    }
}

/// Whether a checkbox-like field is currently on.
fn is_checked(field: &FieldInstance<'_>) -> bool {
    match field.v().value {
        Value::Bool(checked) => checked,
        _ => matches!(field.v().raw_str.as_str(), "true" | "on" | "1"),
    }
}

/// Whether `option` is among the field's submitted values.
fn is_selected(field: &FieldInstance<'_>, option: &str) -> bool {
    field.v().raw_values.iter().any(|v| v == option)
}

/// A plain `<input>` widget.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type.
    pub input_type: String,
    /// Extra attributes.
    pub attrs: WidgetAttrs,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::with_type("text")
    }
}

impl TextInput {
    /// Creates a text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input of the given type (`number`, `email`, ...).
    pub fn with_type(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            attrs: WidgetAttrs::new(),
        }
    }

    /// Sets an extra attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

impl Widget for TextInput {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        // Passwords are never echoed back.
        let value_attr = if self.input_type == "password" {
            String::new()
        } else {
            value_attr(field)
        };

        format!(
            r#"<input type="{}" id="{}" name="{}"{}{}{}>"#,
            self.input_type,
            field_id(field),
            field.name(),
            class_attr(field, &self.attrs),
            value_attr,
            self.attrs.to_html_except(&["class"])
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// A hidden input widget.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        format!(
            r#"<input type="hidden" name="{}"{}>"#,
            field.name(),
            value_attr(field)
        )
    }

    fn input_type(&self) -> &str {
        "hidden"
    }
}

/// A plain textarea widget.
#[derive(Debug, Clone)]
pub struct Textarea {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Default for Textarea {
    fn default() -> Self {
        Self { rows: 4, cols: 40 }
    }
}

impl Widget for Textarea {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        format!(
            r#"<textarea id="{}" name="{}"{} rows="{}" cols="{}">{}</textarea>"#,
            field_id(field),
            field.name(),
            class_attr(field, &WidgetAttrs::new()),
            self.rows,
            self.cols,
            html_escape(&field.v().raw_str)
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// A plain checkbox widget.
#[derive(Debug, Clone, Default)]
pub struct CheckboxInput;

impl Widget for CheckboxInput {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        let checked_attr = if is_checked(field) { " checked" } else { "" };
        format!(
            r#"<input type="checkbox" id="{}" name="{}"{} value="true"{checked_attr}>"#,
            field_id(field),
            field.name(),
            class_attr(field, &WidgetAttrs::new())
        )
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

/// A plain select widget listing the field's choices.
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Whether several options may be chosen.
    pub multiple: bool,
}

impl Select {
    /// Creates a single-choice select.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a multi-choice select.
    pub fn multiple() -> Self {
        Self { multiple: true }
    }
}

impl Widget for Select {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        let multiple_attr = if self.multiple { " multiple" } else { "" };
        format!(
            r#"<select id="{}" name="{}"{}{multiple_attr}>{}</select>"#,
            field_id(field),
            field.name(),
            class_attr(field, &WidgetAttrs::new()),
            render_options(field)
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// Renders `<option>` tags for the field's choices, marking the submitted
/// ones as selected.
fn render_options(field: &FieldInstance<'_>) -> String {
    field
        .model()
        .choices()
        .iter()
        .map(|(value, label)| {
            let selected_attr = if is_selected(field, value) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(value),
                html_escape(label)
            )
        })
        .collect()
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::fields::{BooleanField, MultipleChoiceField, TextField};
    use crate::value::FormData;

    #[test]
    fn test_hidden_input() {
        let model = TextField::new("csrf_token");
        let mut field = model.new_instance();
        field.set_initial("abc123");
        let html = HiddenInput.render(&field);
        assert!(html.contains(r#"type="hidden""#));
        assert!(html.contains(r#"name="csrf_token""#));
        assert!(html.contains(r#"value="abc123""#));
    }

    #[test]
    fn test_text_input_escapes_value() {
        let model = TextField::new("username");
        let mut field = model.new_instance();
        field.set_initial(r#""><script>"#);
        let html = TextInput::new().attr("maxlength", "10").render(&field);
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"id="id_username""#));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains(r#" maxlength="10""#));
    }

    #[test]
    fn test_text_input_password_not_echoed() {
        let model = TextField::new("password");
        let mut field = model.new_instance();
        field.set_initial("hunter2");
        let html = TextInput::with_type("password").render(&field);
        assert_eq!(
            html,
            r#"<input type="password" id="id_password" name="password">"#
        );
    }

    #[test]
    fn test_plain_widgets_mark_invalid() {
        let model = TextField::new("title");
        let mut field = model.new_instance();
        assert!(!TextInput::new().render(&field).contains("class"));

        field.set_errors(vec!["This field is required.".to_string()]);
        assert!(TextInput::new()
            .render(&field)
            .contains(r#"class="is-invalid""#));
        assert!(TextInput::new()
            .attr("class", "wide")
            .render(&field)
            .contains(r#"class="wide is-invalid""#));
        assert!(Textarea::default()
            .render(&field)
            .contains(r#"class="is-invalid""#));
        assert!(CheckboxInput
            .render(&field)
            .contains(r#"class="is-invalid""#));
        assert!(Select::new().render(&field).contains(r#"class="is-invalid""#));
    }

    #[test]
    fn test_textarea() {
        let model = TextField::new("content");
        let mut field = model.new_instance();
        field.set_initial("Hello");
        let html = Textarea::default().render(&field);
        assert!(html.contains(r#"name="content""#));
        assert!(html.contains(">Hello</textarea>"));
    }

    #[test]
    fn test_checkbox_input() {
        let model = BooleanField::new("agree");
        let mut field = model.new_instance();
        assert!(!CheckboxInput.render(&field).contains("checked"));

        field
            .clean(&FormData::new().with("agree", "on"))
            .expect("valid checkbox");
        assert!(CheckboxInput.render(&field).contains(" checked"));
    }

    #[test]
    fn test_select_marks_submitted() {
        let model = MultipleChoiceField::new("tags", vec![("a", "A"), ("b", "B"), ("c", "C")]);
        let mut field = model.new_instance();
        field
            .clean(&FormData::new().with("tags", "a").with("tags", "c"))
            .expect("known choices");
        let html = Select::multiple().render(&field);
        assert!(html.contains(" multiple"));
        assert!(html.contains(r#"value="a" selected"#));
        assert!(html.contains(r#"value="b">"#));
        assert!(html.contains(r#"value="c" selected"#));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_widget_attrs_sorted() {
        let attrs = WidgetAttrs::new()
            .with("id", "my-input")
            .with("class", "form-control");
        assert_eq!(attrs.to_html(), r#" class="form-control" id="my-input""#);
        assert_eq!(attrs.to_html_except(&["id"]), r#" class="form-control""#);
    }
}
