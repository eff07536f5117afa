// File: src/form_context.rs
// Purpose: Redisplay context pairing validation errors with submitted values

use std::collections::HashMap;

use crate::value::RawRecord;
use crate::violation::Violation;

/// Context for re-rendering a form: field errors plus the originally
/// submitted values, so a failed submission can be shown back filled in
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    errors: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl FormContext {
    /// Create a form context with errors and values
    pub fn new(errors: HashMap<String, String>, values: HashMap<String, String>) -> Self {
        Self { errors, values }
    }

    /// Create empty form context
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a context from a failed validation and the submitted record
    ///
    /// The first violation per field wins; violations arrive in schema
    /// order, so the message shown is the first rule that failed.
    pub fn from_failure(violations: &[Violation], submitted: &RawRecord) -> Self {
        let mut errors = HashMap::new();
        for violation in violations {
            errors
                .entry(violation.field.clone())
                .or_insert_with(|| violation.message());
        }

        let values = submitted
            .as_map()
            .iter()
            .map(|(name, value)| (name.clone(), value.to_display_string()))
            .collect();

        Self { errors, values }
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get error message for a field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Get all errors
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get original value for a field
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(|s| s.as_str())
    }

    /// Get all original values
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}
