use fm_shared::FieldViolation;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Flatten `validator` errors into field violations.
///
/// Nested structs become dotted paths (`address.city`), list items indexed
/// paths (`items[2].name`). Fields are ordered by name at each level since
/// `validator` keeps them unordered; messages keep their rule order. A rule
/// without a custom message is reported by its code.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    flatten_into(errors, None, &mut violations);
    violations
}

fn flatten_into(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldViolation>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, kind) in fields {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(rules) => {
                for rule in rules {
                    let message = match &rule.message {
                        Some(message) => message.to_string(),
                        None => rule.code.to_string(),
                    };
                    out.push(FieldViolation::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_into(nested, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}
