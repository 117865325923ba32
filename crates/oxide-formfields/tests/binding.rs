mod common;

use std::collections::HashMap;

use oxide_formfields::fields::{
    boolean_field, char_field, choice_field, multiple_choice_field, FloatField, IntegerField,
    TextField,
};
use oxide_formfields::validation::{
    EqualToValidator, FnValidator, RangeValidator, RequiredValidator,
};
use oxide_formfields::{Data, FieldInstance, Form, FormData, FormInstance, ValidationError};

use common::Fixed;

fn single(validators: Vec<Fixed>) -> Form {
    let mut field = TextField::new("f");
    for v in validators {
        field = field.validator(v);
    }
    Form::builder().field(field).build().expect("single field")
}

fn messages(form: &Form) -> Vec<String> {
    let instance = form.instance();
    instance.get("f").expect("field").validate(&instance)
}

#[test]
fn no_validators_yield_no_messages() {
    assert!(messages(&single(vec![])).is_empty());
}

#[test]
fn failures_are_aggregated_in_registration_order() {
    let form = single(vec![Fixed::fails("required"), Fixed::passes()]);
    assert_eq!(messages(&form), vec!["required"]);

    let form = single(vec![Fixed::fails("too short"), Fixed::fails("bad format")]);
    assert_eq!(messages(&form), vec!["too short", "bad format"]);

    let form = single(vec![
        Fixed::fails("dup"),
        Fixed::passes(),
        Fixed::fails("dup"),
    ]);
    assert_eq!(messages(&form), vec!["dup", "dup"]);
}

#[test]
fn has_error_follows_set_errors() {
    let form = single(vec![]);
    let mut instance = form.instance();
    let field = instance.get_mut("f").expect("field");

    assert!(!field.has_error());
    field.set_errors(vec!["x".to_string()]);
    assert!(field.has_error());
    field.set_errors(Vec::new());
    assert!(!field.has_error());
}

#[test]
fn clean_failure_skips_validators() {
    let form = Form::builder()
        .field(IntegerField::new("count").validator(Fixed::fails("never shown")))
        .build()
        .expect("single field");

    let bound = form.bind(&FormData::new().with("count", "ten"));
    assert_eq!(
        bound.get("count").expect("field").errors(),
        ["Enter a whole number."]
    );
}

#[test]
fn wrong_arity_is_a_clean_error() {
    let form = Form::builder()
        .field(TextField::new("name"))
        .build()
        .expect("single field");

    let bound = form.bind(&FormData::new().with("name", "a").with("name", "b"));
    assert!(!bound.is_valid());
    assert_eq!(
        bound.errors().get("name"),
        Some(&vec!["Expected a single value, got 2.".to_string()])
    );
}

#[test]
fn cross_field_validation_sees_siblings() {
    let form = Form::builder()
        .field(TextField::new("password").validator(RequiredValidator::new()))
        .field(TextField::new("confirm").validator(EqualToValidator::new("password")))
        .field(FloatField::new("min"))
        .field(
            FloatField::new("max").validator(FnValidator::new(
                |field: &FieldInstance<'_>, form: &FormInstance<'_>| {
                    let min = form.get("min").and_then(|f| f.v().value.as_f64());
                    match (min, field.v().value.as_f64()) {
                        (Some(min), Some(max)) if max < min => {
                            Err(ValidationError::new("max must not be below min"))
                        }
                        _ => Ok(()),
                    }
                },
            )),
        )
        .build()
        .expect("distinct names");

    let data = FormData::new()
        .with("password", "secret")
        .with("confirm", "secrets")
        .with("min", "5")
        .with("max", "1.5");
    let bound = form.bind(&data);
    let errors = bound.errors();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("confirm"), Some(&vec!["Must match password.".to_string()]));
    assert_eq!(
        errors.get("max"),
        Some(&vec!["max must not be below min".to_string()])
    );
}

#[test]
fn binds_from_json_and_maps() {
    let form = Form::builder()
        .field(char_field("title", "Title", 20, true))
        .field(IntegerField::new("year").validator(RangeValidator::new(Some(1900.0), None)))
        .field(boolean_field("published", "Published"))
        .field(choice_field(
            "status",
            "Status",
            vec![("draft", "Draft"), ("live", "Live")],
            true,
        ))
        .field(multiple_choice_field(
            "tags",
            "Tags",
            vec![("rust", "Rust"), ("web", "Web")],
            false,
        ))
        .build()
        .expect("distinct names");

    let serde_json::Value::Object(json) = serde_json::json!({
        "title": "Oxide",
        "year": 2024,
        "published": true,
        "status": "live",
        "tags": ["rust", "web"],
    }) else {
        panic!("expected object");
    };
    let bound = form.bind(&json);
    assert!(bound.is_valid(), "{}", bound.errors());
    assert_eq!(
        serde_json::Value::Object(bound.cleaned_data().expect("serializable")),
        serde_json::json!({
            "title": "Oxide",
            "year": 2024,
            "published": true,
            "status": "live",
            "tags": ["rust", "web"],
        })
    );

    let mut map: HashMap<String, String> = HashMap::new();
    map.insert("title".to_string(), String::new());
    map.insert("year".to_string(), "1850".to_string());
    map.insert("status".to_string(), "gone".to_string());
    assert!(map.contains("title"));

    let bound = form.bind(&map);
    let errors = bound.errors();
    assert_eq!(errors.get("title"), Some(&vec!["This field is required.".to_string()]));
    assert_eq!(
        errors.get("year"),
        Some(&vec!["Value must be at least 1900.".to_string()])
    );
    assert_eq!(
        errors.get("status"),
        Some(&vec![
            "Select a valid choice. gone is not one of the available choices.".to_string()
        ])
    );
    assert!(errors.get("published").is_none());
    assert!(errors.get("tags").is_none());
}

#[test]
fn rendered_form_redisplays_input_and_errors() {
    let form = Form::builder()
        .field(char_field("title", "Title", 5, true).description("Keep it short"))
        .build()
        .expect("single field");

    let bound = form.bind(&FormData::new().with("title", "<too long>"));
    let html = bound.render("/posts", "POST");

    assert!(html.contains(r#"value="&lt;too long&gt;""#));
    assert!(html.contains("is-invalid"));
    assert!(html.contains("Ensure this value has at most 5 characters."));
    assert!(html.contains("Keep it short"));
}
