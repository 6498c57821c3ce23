//! Field-level validation errors and path id coercion.
//!
//! Request DTOs derive [`validator::Validate`]; their failures are folded into
//! a single [`CoreError::Validation`] holding one [`FieldError`] per field.

use serde::Serialize;
use validator::ValidationErrors;

use crate::error::CoreError;
use crate::types::DbId;

/// One offending field in a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(field_errors(&errors))
    }
}

/// Flatten `validator` output into wire-named field entries, sorted by field.
///
/// A field that violates several rules reports the first one only.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut entries: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, violations)| {
            let first = violations.first()?;
            let message = match &first.message {
                Some(msg) => msg.to_string(),
                None => format!("failed `{}` check", first.code),
            };
            Some(FieldError::new(wire_field_name(&field.to_string()), message))
        })
        .collect();
    entries.sort_by(|a, b| a.field.cmp(&b.field));
    entries
}

/// Convert a Rust field name (`client_id`) into its JSON name (`clientId`).
pub fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Coerce a raw path segment into a positive database id.
///
/// Only plain ASCII digits are accepted: a sign, surrounding whitespace,
/// zero or an out-of-range value is rejected as a validation error on
/// `field`, before any persistence call is attempted.
pub fn parse_positive_id(field: &str, raw: &str) -> Result<DbId, CoreError> {
    let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    match raw.parse::<DbId>() {
        Ok(id) if digits_only && id > 0 => Ok(id),
        _ => Err(CoreError::invalid(
            wire_field_name(field),
            format!("must be a positive integer, got '{raw}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::{ValidationError, ValidationErrors};

    use super::*;

    #[test]
    fn positive_ids_are_accepted() {
        assert_eq!(parse_positive_id("id", "42").unwrap(), 42);
        assert_eq!(parse_positive_id("id", "007").unwrap(), 7);
    }

    #[test]
    fn zero_negative_and_text_ids_are_rejected() {
        for raw in ["0", "-3", "+1", " 7 ", "abc", "", "1.5", "99999999999999999999"] {
            assert_matches!(
                parse_positive_id("id", raw),
                Err(CoreError::Validation(entries)) if entries[0].field == "id",
                "raw value {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn path_field_names_use_wire_casing() {
        let err = parse_positive_id("client_id", "x").unwrap_err();
        assert_matches!(err, CoreError::Validation(entries) if entries[0].field == "clientId");
    }

    #[test]
    fn wire_field_name_camel_cases() {
        assert_eq!(wire_field_name("name"), "name");
        assert_eq!(wire_field_name("client_id"), "clientId");
        assert_eq!(wire_field_name("a_b_c"), "aBC");
    }

    #[test]
    fn validation_errors_become_sorted_entries() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "value",
            ValidationError::new("range").with_message("value must be >= 0".into()),
        );
        errors.add("client_id", ValidationError::new("range"));

        let entries = field_errors(&errors);
        assert_eq!(
            entries,
            vec![
                FieldError::new("clientId", "failed `range` check"),
                FieldError::new("value", "value must be >= 0"),
            ]
        );
    }
}
