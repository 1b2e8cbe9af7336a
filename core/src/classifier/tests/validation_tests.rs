//! Tests for `validator` failures

use validator::Validate;

use crate::classifier::{classify, flatten_validation_errors};
use crate::errors::ErrorKind;

#[derive(Debug, Validate)]
struct Address {
    #[validate(length(min = 1, message = "required"))]
    city: String,
}

#[derive(Debug, Validate)]
struct Item {
    #[validate(length(min = 1, message = "required"))]
    name: String,
}

#[derive(Debug, Validate)]
struct Signup {
    #[validate(email(message = "invalid format"))]
    email: String,

    #[validate(range(min = 1))]
    age: i32,

    #[validate(nested)]
    address: Address,

    #[validate(nested)]
    items: Vec<Item>,
}

fn invalid_signup() -> Signup {
    Signup {
        email: "not-an-email".to_string(),
        age: 0,
        address: Address { city: String::new() },
        items: vec![
            Item { name: "ok".to_string() },
            Item { name: String::new() },
        ],
    }
}

#[test]
fn test_flatten_nested_paths_in_field_order() {
    let errors = invalid_signup().validate().unwrap_err();
    let violations = flatten_validation_errors(&errors);

    let rendered: Vec<(&str, &str)> = violations
        .iter()
        .map(|v| (v.field.as_str(), v.message.as_str()))
        .collect();

    assert_eq!(
        rendered,
        vec![
            ("address.city", "required"),
            ("age", "range"),
            ("email", "invalid format"),
            ("items[1].name", "required"),
        ]
    );
}

#[test]
fn test_validation_errors_classify_as_validation() {
    let errors = invalid_signup().validate().unwrap_err();
    let classified = classify(&errors);

    assert_eq!(classified.kind(), ErrorKind::Validation);
    assert_eq!(classified.status_code(), 400);
    assert_eq!(classified.field_violations().map(|v| v.len()), Some(4));
    assert!(classified.diagnostic_text().is_some());
}

#[test]
fn test_validation_errors_behind_context() {
    let errors = invalid_signup().validate().unwrap_err();
    let error = anyhow::Error::new(errors).context("validating signup");

    assert_eq!(classify(&*error).kind(), ErrorKind::Validation);
}
