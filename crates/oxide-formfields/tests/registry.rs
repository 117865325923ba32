mod common;

use oxide_formfields::fields::{BooleanField, IntegerField, TextField};
use oxide_formfields::widgets::{TextInput, Widget};
use oxide_formfields::{BaseField, Field, FieldInstance, FieldInstances, Fields, Form};

use common::{field_names, Fixed};

struct Tagged;

impl Widget for Tagged {
    fn render(&self, field: &FieldInstance<'_>) -> String {
        format!("[{}:{}]", field.name(), field.v().raw_str)
    }
}

#[test]
fn distinct_names_are_all_addressable_in_order() {
    let names = ["zeta", "alpha", "mid", "email address"];
    let mut fields = Fields::new();
    for name in names {
        assert!(fields.register(TextField::new(name)));
    }

    let listed: Vec<_> = fields.list().iter().map(|f| f.get_name()).collect();
    assert_eq!(listed, names);
    for name in names {
        assert_eq!(fields.get(name).map(Field::get_name), Some(name));
    }
}

#[test]
fn duplicate_registration_is_rejected_without_mutation() {
    let mut fields = Fields::new();
    fields.register(TextField::new("a").label("First"));
    fields.register(IntegerField::new("b"));

    assert!(!fields.register(BooleanField::new("a").label("Second")));
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(fields.get("a").map(Field::get_label).as_deref(), Some("First"));
}

#[test]
fn lookup_is_exact() {
    let mut fields = Fields::new();
    fields.register(TextField::new("Email"));
    assert!(fields.get("Email").is_some());
    assert!(fields.get("email").is_none());
    assert!(fields.get("Ema").is_none());
}

#[test]
fn label_resolution() {
    assert_eq!(BaseField::new("email address").get_label(), "Email Address");
    assert_eq!(
        BaseField::new("email address").label("Your e-mail").get_label(),
        "Your e-mail"
    );
    assert_eq!(
        BaseField::new("email address")
            .label("Your e-mail")
            .hide_label()
            .get_label(),
        ""
    );
}

#[test]
fn instances_are_one_per_definition_and_independent() {
    let form = Form::builder()
        .field(TextField::new("one"))
        .field(TextField::new("two"))
        .field(TextField::new("three"))
        .build()
        .expect("distinct names");

    let mut first = form.instance();
    let second = form.instance();
    assert_eq!(first.fields().len(), 3);
    assert_eq!(field_names(&first), vec!["one", "two", "three"]);

    first.set_initial("one", "changed").expect("known field");
    first
        .get_mut("two")
        .expect("field")
        .set_errors(vec!["boom".to_string()]);

    assert_eq!(first.get("one").map(|f| f.v().raw_str.as_str()), Some("changed"));
    assert_eq!(first.get("three").map(|f| f.v().raw_str.as_str()), Some(""));
    assert!(!first.get("one").expect("field").has_error());
    assert!(second.fields().iter().all(|f| f.v().raw_str.is_empty() && !f.has_error()));
}

#[test]
fn new_instances_start_clean() {
    let field = TextField::new("name").validator(Fixed::fails("nope"));
    let a = field.new_instance();
    let b = field.new_instance();
    assert!(!a.has_error());
    assert!(!b.has_error());
    assert!(a.errors().is_empty());
}

#[test]
fn rendering_dispatch() {
    let mut fields = Fields::new();
    fields.register(TextField::new("plain"));
    fields.register(TextField::new("tagged").widget(Tagged));

    let mut instances = FieldInstances::new(&fields);
    if let Some(field) = instances.get_mut("tagged") {
        field.set_initial("v");
    }

    let plain = instances.get("plain").expect("field");
    assert_eq!(plain.html(), r#"<input type="text" id="id_plain" name="plain">"#);
    // Rendering is repeatable and never touches errors.
    assert_eq!(plain.html(), plain.html());
    assert!(!plain.has_error());

    assert_eq!(instances.get("tagged").expect("field").html(), "[tagged:v]");
}

#[test]
fn widget_assigned_during_setup() {
    let mut form = Form::builder()
        .field(TextField::new("title"))
        .build()
        .expect("single field");
    form.fields_mut()
        .get_mut("title")
        .expect("field")
        .set_widget(Box::new(TextInput::with_type("search")));

    let instance = form.instance();
    assert!(instance
        .render_field("title")
        .expect("field")
        .contains(r#"type="search""#));
}
