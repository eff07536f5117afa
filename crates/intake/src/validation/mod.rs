// File: src/validation/mod.rs
// Purpose: Single-pass validation and coercion of raw records

use crate::record::{FieldValue, Record};
use crate::rule::{FieldKind, FieldRule, Format, Requirement};
use crate::schema::Schema;
use crate::value::{RawRecord, RawValue};
use crate::violation::{Violation, ViolationKind};

pub mod validators;

/// Result of validating a raw record against a schema
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Validation passed; the normalized record is ready for persistence
    Valid(Record),
    /// Validation failed; every discovered violation, in schema order
    Invalid(Vec<Violation>),
}

impl Validation {
    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Check if validation failed
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Extract the normalized record if validation passed
    pub fn ok(self) -> Option<Record> {
        match self {
            Validation::Valid(record) => Some(record),
            Validation::Invalid(_) => None,
        }
    }

    /// Extract the violations if validation failed
    pub fn err(self) -> Option<Vec<Violation>> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(violations) => Some(violations),
        }
    }
}

/// Validate a raw record against a schema
///
/// Pure function of its arguments. Rules are applied in schema order and
/// every violation is collected; there is no short-circuit on the first
/// failure. Zero violations yield a normalized record with coercions and
/// defaults applied; otherwise only the violation list is returned.
pub fn validate(schema: &Schema, input: &RawRecord) -> Validation {
    let mut record = Record::new();
    let mut violations = Vec::new();

    for rule in schema.fields() {
        let raw = input
            .get(&rule.name)
            .filter(|value| !treated_as_absent(rule, value));

        match raw {
            None => match &rule.requirement {
                Requirement::Required => {
                    violations.push(Violation::new(&rule.name, ViolationKind::Missing));
                }
                Requirement::Optional => {}
                Requirement::Default(value) => record.insert(&rule.name, value.clone()),
            },
            Some(value) => match check_field(rule, value) {
                Ok(typed) => record.insert(&rule.name, typed),
                Err(kinds) => violations.extend(
                    kinds
                        .into_iter()
                        .map(|kind| Violation::new(&rule.name, kind)),
                ),
            },
        }
    }

    if violations.is_empty() {
        Validation::Valid(record)
    } else {
        tracing::debug!(
            entity = schema.entity(),
            violations = violations.len(),
            "record failed validation"
        );
        Validation::Invalid(violations)
    }
}

/// Empty string, null and NaN read as "key missing" for rules that opted in
fn treated_as_absent(rule: &FieldRule, value: &RawValue) -> bool {
    if !rule.empty_as_missing {
        return false;
    }
    match value {
        RawValue::Null => true,
        RawValue::String(s) => s.is_empty(),
        RawValue::Number(n) => n.is_nan(),
        _ => false,
    }
}

fn check_field(rule: &FieldRule, value: &RawValue) -> Result<FieldValue, Vec<ViolationKind>> {
    match rule.kind {
        FieldKind::Text => check_text(rule, value),
        FieldKind::Number => check_number(value).map_err(|kind| vec![kind]),
        FieldKind::Bool => check_bool(value).map_err(|kind| vec![kind]),
    }
}

fn check_text(rule: &FieldRule, value: &RawValue) -> Result<FieldValue, Vec<ViolationKind>> {
    let text = match value {
        RawValue::String(s) => s.clone(),
        // Scalar input coerces to its display form, as a form layer would
        RawValue::Number(_) | RawValue::Bool(_) => value.to_display_string(),
        _ => return Err(vec![ViolationKind::WrongType { expected: "string" }]),
    };

    if text.is_empty() {
        // A required text field submitted empty reads as missing; an
        // optional one passes through unchanged, exempt from format checks
        return if matches!(rule.requirement, Requirement::Required) {
            Err(vec![ViolationKind::Missing])
        } else {
            Ok(FieldValue::Text(text))
        };
    }

    let mut kinds = Vec::new();
    if let Some(min) = rule.min_chars {
        if !intake_validation::has_min_chars(&text, min) {
            kinds.push(ViolationKind::TooShort { min });
        }
    }
    if let Some(max) = rule.max_chars {
        if !intake_validation::has_max_chars(&text, max) {
            kinds.push(ViolationKind::TooLong { max });
        }
    }
    match rule.format {
        Some(Format::Email) if !validators::is_valid_email(&text) => {
            kinds.push(ViolationKind::BadFormat {
                expected: "email address",
            });
        }
        Some(Format::Code { max }) if !validators::is_valid_code(&text, max) => {
            kinds.push(ViolationKind::BadCode { max });
        }
        _ => {}
    }

    if kinds.is_empty() {
        Ok(FieldValue::Text(text))
    } else {
        Err(kinds)
    }
}

fn check_number(value: &RawValue) -> Result<FieldValue, ViolationKind> {
    match value {
        RawValue::Number(n) if intake_validation::is_finite_number(*n) => {
            Ok(FieldValue::Number(*n))
        }
        RawValue::String(s) => intake_validation::parse_number(s)
            .map(FieldValue::Number)
            .ok_or(ViolationKind::WrongType { expected: "number" }),
        _ => Err(ViolationKind::WrongType { expected: "number" }),
    }
}

fn check_bool(value: &RawValue) -> Result<FieldValue, ViolationKind> {
    match value {
        RawValue::Bool(b) => Ok(FieldValue::Bool(*b)),
        _ => Err(ViolationKind::WrongType { expected: "boolean" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::FieldRule;
    use pretty_assertions::assert_eq;

    fn sample_schema() -> Schema {
        Schema::new(
            "sample",
            vec![
                FieldRule::text("title").required().min_chars(3).max_chars(10),
                FieldRule::text("notes"),
                FieldRule::number("amount"),
                FieldRule::number("slot").empty_as_missing(),
                FieldRule::flag("enabled").default_value(true),
            ],
        )
    }

    fn violations_of(result: Validation) -> Vec<Violation> {
        result.err().expect("expected validation failure")
    }

    #[test]
    fn test_valid_record_normalizes() {
        let mut input = RawRecord::new();
        input.set("title", "Ledger");
        input.set("amount", 12.5);

        let record = sample_schema().validate(&input).ok().expect("valid");
        assert_eq!(record.text("title"), Some("Ledger"));
        assert_eq!(record.number("amount"), Some(12.5));
        assert_eq!(record.flag("enabled"), Some(true));
        assert!(!record.contains("notes"));
        assert!(!record.contains("slot"));
    }

    #[test]
    fn test_required_field_missing() {
        let input = RawRecord::new();
        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(violations, vec![Violation::new("title", ViolationKind::Missing)]);
    }

    #[test]
    fn test_required_empty_string_reads_as_missing() {
        let mut input = RawRecord::new();
        input.set("title", "");
        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(violations, vec![Violation::new("title", ViolationKind::Missing)]);
    }

    #[test]
    fn test_length_bounds() {
        let mut input = RawRecord::new();
        input.set("title", "ab");
        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(
            violations,
            vec![Violation::new("title", ViolationKind::TooShort { min: 3 })]
        );

        let mut input = RawRecord::new();
        input.set("title", "far too long a title");
        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(
            violations,
            vec![Violation::new("title", ViolationKind::TooLong { max: 10 })]
        );
    }

    #[test]
    fn test_number_accepts_numeric_string() {
        let mut input = RawRecord::new();
        input.set("title", "Ledger");
        input.set("amount", "42");

        let record = sample_schema().validate(&input).ok().expect("valid");
        assert_eq!(record.number("amount"), Some(42.0));
    }

    #[test]
    fn test_number_rejects_non_numeric() {
        let mut input = RawRecord::new();
        input.set("title", "Ledger");
        input.set("amount", "not a number");

        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(
            violations,
            vec![Violation::new(
                "amount",
                ViolationKind::WrongType { expected: "number" }
            )]
        );
    }

    #[test]
    fn test_nan_without_preprocessing_is_type_violation() {
        let mut input = RawRecord::new();
        input.set("title", "Ledger");
        input.set("amount", f64::NAN);

        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(
            violations,
            vec![Violation::new(
                "amount",
                ViolationKind::WrongType { expected: "number" }
            )]
        );
    }

    #[test]
    fn test_empty_as_missing_covers_all_three_sentinels() {
        for sentinel in [
            RawValue::String(String::new()),
            RawValue::Null,
            RawValue::Number(f64::NAN),
        ] {
            let mut input = RawRecord::new();
            input.set("title", "Ledger");
            input.set("slot", sentinel);

            let record = sample_schema().validate(&input).ok().expect("valid");
            assert!(!record.contains("slot"));
        }
    }

    #[test]
    fn test_empty_as_missing_stays_narrow() {
        // A numeric string is parsed, not coerced to absent
        let mut input = RawRecord::new();
        input.set("title", "Ledger");
        input.set("slot", "5");

        let record = sample_schema().validate(&input).ok().expect("valid");
        assert_eq!(record.number("slot"), Some(5.0));
    }

    #[test]
    fn test_bool_wrong_type() {
        let mut input = RawRecord::new();
        input.set("title", "Ledger");
        input.set("enabled", "yes");

        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(
            violations,
            vec![Violation::new(
                "enabled",
                ViolationKind::WrongType { expected: "boolean" }
            )]
        );
    }

    #[test]
    fn test_null_without_preprocessing_is_type_violation() {
        let mut input = RawRecord::new();
        input.set("title", "Ledger");
        input.set("notes", RawValue::Null);

        let violations = violations_of(sample_schema().validate(&input));
        assert_eq!(
            violations,
            vec![Violation::new(
                "notes",
                ViolationKind::WrongType { expected: "string" }
            )]
        );
    }

    #[test]
    fn test_scalar_coerces_to_text() {
        let mut input = RawRecord::new();
        input.set("title", 12345);
        input.set("notes", true);

        let record = sample_schema().validate(&input).ok().expect("valid");
        assert_eq!(record.text("title"), Some("12345"));
        assert_eq!(record.text("notes"), Some("true"));
    }

    #[test]
    fn test_all_violations_collected_in_schema_order() {
        let mut input = RawRecord::new();
        input.set("amount", "x");
        input.set("enabled", 1);

        let violations = violations_of(sample_schema().validate(&input));
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "amount", "enabled"]);
    }

    #[test]
    fn test_validation_accessors() {
        let mut input = RawRecord::new();
        input.set("title", "Ledger");

        let result = sample_schema().validate(&input);
        assert!(result.is_valid());
        assert!(!result.is_invalid());
        assert!(result.ok().is_some());

        let result = sample_schema().validate(&RawRecord::new());
        assert!(result.is_invalid());
        assert!(result.err().is_some());
    }
}
