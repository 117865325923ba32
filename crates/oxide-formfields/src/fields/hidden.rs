//! Hidden field helper.

use super::TextField;
use crate::widgets::HiddenInput;

/// Creates a hidden text field with an optional initial value.
pub fn hidden_field(name: &str, initial: Option<&str>) -> TextField {
    let field = TextField::new(name).hide_label().widget(HiddenInput);

    match initial {
        Some(value) => field.initial(value),
        None => field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_hidden_field() {
        let field = hidden_field("csrf_token", Some("abc123"));
        assert_eq!(field.get_name(), "csrf_token");
        assert_eq!(field.get_label(), "");
        assert_eq!(field.base().get_initial(), Some("abc123"));
        assert_eq!(
            field.new_instance().html(),
            r#"<input type="hidden" name="csrf_token" value="abc123">"#
        );
    }
}
