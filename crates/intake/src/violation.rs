// File: src/violation.rs
// Purpose: Per-field validation failures collected during a validation pass

use serde::Serialize;
use thiserror::Error;

/// Why a field failed validation
///
/// Violations are data, not control flow: the validator collects every one
/// it finds and hands the list to the caller for display. Message text is
/// rendered here; localization is a caller concern.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field absent, or a required text field submitted empty
    #[error("is required")]
    Missing,
    #[error("must have at least {min} characters")]
    TooShort { min: usize },
    #[error("must have at most {max} characters")]
    TooLong { max: usize },
    /// Value does not match the declared shape (e.g. email)
    #[error("is not a valid {expected}")]
    BadFormat { expected: &'static str },
    /// Short code exceeding its fixed length (e.g. a region abbreviation)
    #[error("must be a code of at most {max} characters")]
    BadCode { max: usize },
    #[error("must be a {expected}")]
    WrongType { expected: &'static str },
}

/// A single (field, reason) pair describing why input failed a rule
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{field} {kind}")]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Human-readable message without the field name
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ViolationKind::Missing.to_string(), "is required");
        assert_eq!(
            ViolationKind::TooLong { max: 100 }.to_string(),
            "must have at most 100 characters"
        );
        assert_eq!(
            ViolationKind::BadFormat {
                expected: "email address"
            }
            .to_string(),
            "is not a valid email address"
        );
        assert_eq!(
            ViolationKind::WrongType { expected: "number" }.to_string(),
            "must be a number"
        );
    }

    #[test]
    fn test_display_includes_field() {
        let violation = Violation::new("email", ViolationKind::BadFormat {
            expected: "email address",
        });
        assert_eq!(violation.to_string(), "email is not a valid email address");
        assert_eq!(violation.message(), "is not a valid email address");
    }

    #[test]
    fn test_serializes_for_error_payloads() {
        let violation = Violation::new("name", ViolationKind::TooLong { max: 200 });
        let payload = serde_json::to_value(&violation).expect("serializable");
        assert_eq!(
            payload,
            serde_json::json!({
                "field": "name",
                "kind": {"rule": "too_long", "max": 200}
            })
        );
    }
}
