//! Pure field validation rules

use super::field::{FieldKind, FormField};

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "Enter a valid email";
pub const MSG_PHONE: &str = "Enter a valid phone number";

/// Minimum number of characters for a telephone value
const PHONE_MIN_LEN: usize = 9;

/// Outcome of checking a single required field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCheck {
    pub field: String,
    pub kind: FieldKind,
    pub value: String,
    pub valid: bool,
    /// Always present (and non-empty) when `valid` is false
    pub message: Option<String>,
}

impl FieldCheck {
    fn valid(field: &FormField) -> Self {
        Self {
            field: field.name.clone(),
            kind: field.kind,
            value: field.value.clone(),
            valid: true,
            message: None,
        }
    }

    fn invalid(field: &FormField, message: &str) -> Self {
        Self {
            field: field.name.clone(),
            kind: field.kind,
            value: field.value.clone(),
            valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Check every required field, in declaration order, without short-circuiting.
/// Fields that are not required are never checked.
pub fn validate(fields: &[FormField]) -> Vec<FieldCheck> {
    fields
        .iter()
        .filter(|f| f.required)
        .map(check_field)
        .collect()
}

fn check_field(field: &FormField) -> FieldCheck {
    if field.value.trim().is_empty() {
        return FieldCheck::invalid(field, MSG_REQUIRED);
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(&field.value) => {
            FieldCheck::invalid(field, MSG_EMAIL)
        }
        FieldKind::Tel if !is_valid_phone(&field.value) => FieldCheck::invalid(field, MSG_PHONE),
        _ => FieldCheck::valid(field),
    }
}

/// Accepts values shaped like `local@domain.tld`: a non-empty local part,
/// one '@', and a domain with a dot and non-empty parts around it.
/// No whitespace anywhere.
pub(crate) fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Accepts digits, spaces, hyphens, plus signs and parentheses, with at
/// least nine characters in total.
pub(crate) fn is_valid_phone(value: &str) -> bool {
    value.chars().count() >= PHONE_MIN_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(name: &str, kind: FieldKind, value: &str) -> FormField {
        let field = match kind {
            FieldKind::Email => FormField::email(name, name, true),
            FieldKind::Tel => FormField::tel(name, name, true),
            _ => FormField::text(name, name, true, false),
        };
        field.with_value(value)
    }

    mod required_rule {
        use super::*;

        #[test]
        fn test_empty_required_field_fails_regardless_of_kind() {
            for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Tel] {
                let checks = validate(&[required("f", kind, "")]);
                assert!(!checks[0].valid);
                assert_eq!(checks[0].message.as_deref(), Some(MSG_REQUIRED));
            }
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let checks = validate(&[required("f", FieldKind::Text, "   \t ")]);
            assert!(!checks[0].valid);
            assert_eq!(checks[0].message.as_deref(), Some(MSG_REQUIRED));
        }

        #[test]
        fn test_optional_fields_are_never_checked() {
            let optional = FormField::email("email", "Email", false).with_value("not-an-email");
            let checks = validate(&[optional]);
            assert!(checks.is_empty());
        }
    }

    mod email_rule {
        use super::*;

        #[test]
        fn test_simple_address_passes() {
            let checks = validate(&[required("email", FieldKind::Email, "a@b.c")]);
            assert!(checks[0].valid);
        }

        #[test]
        fn test_not_an_email_fails() {
            let checks = validate(&[required("email", FieldKind::Email, "not-an-email")]);
            assert!(!checks[0].valid);
            assert_eq!(checks[0].message.as_deref(), Some(MSG_EMAIL));
        }

        #[test]
        fn test_shape_edge_cases() {
            assert!(is_valid_email("luna@mystica.example"));
            assert!(!is_valid_email("@b.c"));
            assert!(!is_valid_email("a@b"));
            assert!(!is_valid_email("a@b."));
            assert!(!is_valid_email("a@.c"));
            assert!(!is_valid_email("a b@c.d"));
            assert!(!is_valid_email("a@b@c.d"));
        }
    }

    mod phone_rule {
        use super::*;

        #[test]
        fn test_nine_digits_pass() {
            let checks = validate(&[required("phone", FieldKind::Tel, "123456789")]);
            assert!(checks[0].valid);
        }

        #[test]
        fn test_short_number_fails() {
            let checks = validate(&[required("phone", FieldKind::Tel, "12345")]);
            assert!(!checks[0].valid);
            assert_eq!(checks[0].message.as_deref(), Some(MSG_PHONE));
        }

        #[test]
        fn test_punctuation_is_allowed() {
            assert!(is_valid_phone("+34 (600) 123-456"));
        }

        #[test]
        fn test_letters_are_rejected() {
            assert!(!is_valid_phone("12345678x"));
        }
    }

    #[test]
    fn test_checks_follow_declaration_order_without_short_circuit() {
        let fields = vec![
            required("first", FieldKind::Text, ""),
            required("second", FieldKind::Email, "bad"),
            required("third", FieldKind::Text, "ok"),
        ];
        let checks = validate(&fields);
        assert_eq!(checks.len(), 3);
        assert_eq!(checks[0].field, "first");
        assert!(!checks[0].valid);
        assert_eq!(checks[1].field, "second");
        assert_eq!(checks[1].kind, FieldKind::Email);
        assert_eq!(checks[1].value, "bad");
        assert!(!checks[1].valid);
        assert_eq!(checks[2].field, "third");
        assert!(checks[2].valid);
    }

    #[test]
    fn test_invalid_checks_always_carry_a_message() {
        let fields = vec![
            required("a", FieldKind::Text, ""),
            required("b", FieldKind::Email, "nope"),
            required("c", FieldKind::Tel, "123"),
        ];
        for check in validate(&fields) {
            assert!(!check.valid);
            assert!(check.message.as_deref().is_some_and(|m| !m.is_empty()));
        }
    }
}
