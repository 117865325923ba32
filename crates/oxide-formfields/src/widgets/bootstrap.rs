//! Bootstrap 5 form widgets.
//!
//! Every widget adds `is-invalid` to its control when the bound field has
//! errors, so the surrounding `invalid-feedback` blocks become visible.

use super::{field_id, html_escape, is_checked, is_selected, value_attr, Widget, WidgetAttrs};
use crate::instance::FieldInstance;

fn control_class(base: &str, field: &FieldInstance<'_>, attrs: &WidgetAttrs) -> String {
    let mut class = base.to_string();
    if let Some(extra_class) = attrs.get("class") {
        class = format!("{class} {extra_class}");
    }
    if field.has_error() {
        class.push_str(" is-invalid");
    }
    class
}

/// Bootstrap 5 text input widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type (text, email, password, etc.).
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Extra attributes.
    pub attrs: WidgetAttrs,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
            attrs: WidgetAttrs::new(),
        }
    }
}

impl BootstrapTextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self::of_type("password")
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::of_type("email")
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::of_type("number")
    }

    /// Creates a url input.
    pub fn url() -> Self {
        Self::of_type("url")
    }

    fn of_type(input_type: &str) -> Self {
        Self {
            input_type: input_type.to_string(),
            ..Default::default()
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Sets an extra attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        // Passwords are never echoed back.
        let value_attr = if self.input_type == "password" {
            String::new()
        } else {
            value_attr(field)
        };

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{}{}>"#,
            self.input_type,
            control_class("form-control", field, &self.attrs),
            field_id(field),
            field.name(),
            value_attr,
            placeholder_attr,
            self.attrs.to_html_except(&["class", "id"])
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// Bootstrap 5 textarea widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextarea {
    /// Number of rows.
    pub rows: usize,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for BootstrapTextarea {
    fn default() -> Self {
        Self::new(4)
    }
}

impl BootstrapTextarea {
    /// Creates a new textarea with the specified rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            placeholder: None,
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextarea {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<textarea class="{}" id="{}" name="{}" rows="{}"{placeholder_attr}>{}</textarea>"#,
            control_class("form-control", field, &WidgetAttrs::new()),
            field_id(field),
            field.name(),
            self.rows,
            html_escape(&field.v().raw_str)
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// Bootstrap 5 select widget over the field's choices.
#[derive(Debug, Clone)]
pub struct BootstrapSelect {
    /// Whether to include an empty option.
    pub include_blank: bool,
    /// Label for blank option.
    pub blank_label: String,
    /// Whether several options may be chosen.
    pub multiple: bool,
}

impl Default for BootstrapSelect {
    fn default() -> Self {
        Self {
            include_blank: true,
            blank_label: "---------".to_string(),
            multiple: false,
        }
    }
}

impl BootstrapSelect {
    /// Creates a new single-choice select.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a multi-choice select without a blank option.
    pub fn multiple() -> Self {
        Self {
            include_blank: false,
            multiple: true,
            ..Default::default()
        }
    }

    /// Disables the blank option.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        self.include_blank = false;
        self
    }

    /// Sets the blank label.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = label.into();
        self
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        let mut options = String::new();
        if self.include_blank {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(&self.blank_label)
            ));
        }
        options.push_str(&super::render_options(field));

        let multiple_attr = if self.multiple { " multiple" } else { "" };
        format!(
            r#"<select class="{}" id="{}" name="{}"{multiple_attr}>{}</select>"#,
            control_class("form-select", field, &WidgetAttrs::new()),
            field_id(field),
            field.name(),
            options
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// Bootstrap 5 checkbox widget, labelled with the field's label.
#[derive(Debug, Clone, Default)]
pub struct BootstrapCheckbox {
    /// Whether to use switch style.
    pub is_switch: bool,
}

impl BootstrapCheckbox {
    /// Creates a new checkbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a switch-style checkbox.
    pub fn switch() -> Self {
        Self { is_switch: true }
    }
}

impl Widget for BootstrapCheckbox {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        let id = field_id(field);
        let checked_attr = if is_checked(field) { " checked" } else { "" };
        let wrapper_class = if self.is_switch {
            "form-check form-switch"
        } else {
            "form-check"
        };

        let label = field.label();
        let label_html = if label.is_empty() {
            String::new()
        } else {
            format!(
                r#"<label class="form-check-label" for="{id}">{}</label>"#,
                html_escape(&label)
            )
        };

        format!(
            r#"<div class="{}">
  <input class="{}" type="checkbox" id="{id}" name="{}" value="true"{checked_attr}>
  {label_html}
</div>"#,
            wrapper_class,
            control_class("form-check-input", field, &WidgetAttrs::new()),
            field.name(),
        )
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

/// Bootstrap 5 radio group over the field's choices.
#[derive(Debug, Clone, Default)]
pub struct BootstrapRadioSelect {
    /// Whether to display inline.
    pub inline: bool,
}

impl BootstrapRadioSelect {
    /// Creates a new stacked radio group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the radios display inline.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

impl Widget for BootstrapRadioSelect {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        let wrapper_class = if self.inline {
            "form-check form-check-inline"
        } else {
            "form-check"
        };
        let input_class = control_class("form-check-input", field, &WidgetAttrs::new());
        let name = field.name();

        field
            .model()
            .choices()
            .iter()
            .enumerate()
            .map(|(i, (opt_value, label))| {
                let id = format!("id_{name}_{i}");
                let checked_attr = if is_selected(field, opt_value) {
                    " checked"
                } else {
                    ""
                };
                format!(
                    r#"<div class="{wrapper_class}">
  <input class="{input_class}" type="radio" id="{id}" name="{name}" value="{}"{checked_attr}>
  <label class="form-check-label" for="{id}">{}</label>
</div>
"#,
                    html_escape(opt_value),
                    html_escape(label)
                )
            })
            .collect()
    }

    fn input_type(&self) -> &str {
        "radio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::fields::{BooleanField, ChoiceField, TextField};

    #[test]
    fn test_bootstrap_text_input() {
        let model = TextField::new("username");
        let field = model.new_instance();
        let html = BootstrapTextInput::new()
            .placeholder("Enter name")
            .render(&field);
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"placeholder="Enter name""#));
    }

    #[test]
    fn test_bootstrap_invalid_class() {
        let model = TextField::new("username");
        let mut field = model.new_instance();
        field.set_errors(vec!["This field is required.".to_string()]);
        let html = BootstrapTextInput::new().render(&field);
        assert!(html.contains(r#"class="form-control is-invalid""#));
    }

    #[test]
    fn test_bootstrap_password_not_echoed() {
        let model = TextField::new("password");
        let mut field = model.new_instance();
        field.set_initial("hunter2");
        let html = BootstrapTextInput::password().render(&field);
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("hunter2"));
    }

    #[test]
    fn test_bootstrap_textarea() {
        let model = TextField::new("content");
        let mut field = model.new_instance();
        field.set_initial("Hello");
        let html = BootstrapTextarea::new(6).render(&field);
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains(r#"rows="6""#));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_bootstrap_select() {
        let model = ChoiceField::new("choice", vec![("1", "Option 1"), ("2", "Option 2")]);
        let mut field = model.new_instance();
        field.set_initial("2");
        let html = BootstrapSelect::new().render(&field);
        assert!(html.contains(r#"class="form-select""#));
        assert!(html.contains(r#"<option value="">---------</option>"#));
        assert!(html.contains(r#"value="2" selected"#));
    }

    #[test]
    fn test_bootstrap_checkbox_uses_field_label() {
        let model = BooleanField::new("agree").label("I agree");
        let mut field = model.new_instance();
        field.set_initial("true");
        let html = BootstrapCheckbox::new().render(&field);
        assert!(html.contains("form-check"));
        assert!(html.contains("checked"));
        assert!(html.contains("I agree"));
    }

    #[test]
    fn test_bootstrap_switch() {
        let model = BooleanField::new("enabled");
        let field = model.new_instance();
        let html = BootstrapCheckbox::switch().render(&field);
        assert!(html.contains("form-switch"));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_bootstrap_radio_select() {
        let model = ChoiceField::new("choice", vec![("a", "Option A"), ("b", "Option B")]);
        let mut field = model.new_instance();
        field.set_initial("b");
        let html = BootstrapRadioSelect::new().inline().render(&field);
        assert!(html.contains("form-check-inline"));
        assert!(html.contains(r#"id="id_choice_1""#));
        assert!(html.contains(r#"value="b" checked"#));
        assert!(!html.contains(r#"value="a" checked"#));
    }
}
