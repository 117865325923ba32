//! # oxide-formfields
//!
//! Form field definitions, per-request binding, validation and rendering.
//!
//! This crate provides:
//! - An ordered, name-indexed registry of field definitions
//! - Field instances that hold one binding's raw values and errors
//! - Validators that see the whole form, so cross-field rules are plain
//!   validators
//! - Widgets (plain and Bootstrap 5) with a per-kind fallback renderer
//!
//! Definitions are built once and shared; every binding creates fresh
//! instances that borrow them.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_formfields::{Form, FormData};
//! use oxide_formfields::fields::{email_field, password_field, TextField};
//! use oxide_formfields::validation::EqualToValidator;
//!
//! let form = Form::builder()
//!     .field(email_field("email", "Email", true))
//!     .field(password_field("password", "Password", Some(8)))
//!     .field(
//!         TextField::new("confirm")
//!             .label("Confirm password")
//!             .validator(EqualToValidator::new("password")),
//!     )
//!     .build()
//!     .expect("field names are unique");
//!
//! let data = FormData::new()
//!     .with("email", "user@example.com")
//!     .with("password", "correct horse")
//!     .with("confirm", "correct horse");
//!
//! let bound = form.bind(&data);
//! assert!(bound.is_valid());
//!
//! let html = bound.render("/signup", "POST");
//! assert!(html.contains("Confirm password"));
//! ```
//!
//! ## Registries
//!
//! ```rust
//! use oxide_formfields::{Field, Fields, FieldInstances};
//! use oxide_formfields::fields::TextField;
//! use oxide_formfields::widgets::BootstrapTextInput;
//!
//! let mut fields = Fields::new();
//! assert!(fields.register(TextField::new("email address")));
//! // First registration for a name wins.
//! assert!(!fields.register(TextField::new("email address")));
//!
//! // Widgets can be assigned after the fields are registered.
//! if let Some(field) = fields.get_mut("email address") {
//!     field.set_widget(Box::new(BootstrapTextInput::email()));
//! }
//!
//! let instances = FieldInstances::new(&fields);
//! let field = instances.get("email address").unwrap();
//! assert_eq!(field.label(), "Email Address");
//! assert!(field.html().contains(r#"type="email""#));
//! ```
//!
//! ## Widgets
//!
//! Available Bootstrap 5 widgets:
//! - `BootstrapTextInput` - Text, email, password, number, url inputs
//! - `BootstrapTextarea` - Multi-line text input
//! - `BootstrapSelect` - Dropdown select over the field's choices
//! - `BootstrapCheckbox` - Checkbox with optional switch style
//! - `BootstrapRadioSelect` - Radio button group

mod error;
mod field;
pub mod fields;
mod form;
mod instance;
pub mod validation;
mod value;
pub mod widgets;

pub use error::{FormError, Result, ValidationError, ValidationErrors};
pub use field::{title_case, BaseField, Field, Fields};
pub use form::{Form, FormBuilder, FormInstance};
pub use instance::{render_field, FieldInstance, FieldInstances};
pub use value::{Data, FormData, Value, V};
