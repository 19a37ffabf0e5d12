//! Form field value objects

/// Input kind of a field, used to pick the validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Other,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
    pub is_multiline: bool,
    /// Inline error annotation; a single slot so re-validation never stacks
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, required: bool, is_multiline: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required, is_multiline)
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Email, required, false)
    }

    /// Create a new telephone field
    pub fn tel(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Tel, required, false)
    }

    fn new(name: &str, label: &str, kind: FieldKind, required: bool, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind,
            required,
            is_multiline,
            error: None,
        }
    }

    /// Set an initial value (builder style, used for prefilled fields)
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value and any error annotation
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Attach an inline error annotation, replacing any prior one
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Remove the inline error annotation
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Whether the field currently carries an error annotation
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("name", "Your name", true, false);
        assert_eq!(field.value, "");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(field.required);
        assert!(!field.is_invalid());
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::email("email", "Email", true);
        field.push_char('a');
        field.push_char('@');
        field.push_char('b');
        assert_eq!(field.value, "a@b");
        field.pop_char();
        assert_eq!(field.value, "a@");
    }

    #[test]
    fn test_set_error_replaces_prior_annotation() {
        let mut field = FormField::tel("phone", "Phone", true);
        field.set_error("first");
        field.set_error("second");
        assert_eq!(field.error.as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_resets_value_and_error() {
        let mut field = FormField::text("name", "Your name", true, false);
        field.push_char('x');
        field.set_error("bad");
        field.clear();
        assert_eq!(field.value, "");
        assert!(!field.is_invalid());
    }

    #[test]
    fn test_with_value_prefills() {
        let field = FormField::text("date", "Preferred date", false, false).with_value("2025-01-01");
        assert_eq!(field.value, "2025-01-01");
    }
}
