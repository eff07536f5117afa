// File: src/rule.rs
// Purpose: Field rule definitions - kind, requirement, bounds, format

use crate::record::FieldValue;

/// Closed set of field kinds a rule can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Bool,
}

impl FieldKind {
    /// Type name for violation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
            FieldKind::Bool => "boolean",
        }
    }
}

/// Whether a field must be present, and what happens when it is not
///
/// "Optional with a default" is its own variant rather than an inferred
/// `Option`, so a falsy default and "no default" can never be confused.
#[derive(Debug, Clone, PartialEq)]
pub enum Requirement {
    /// Absent input is a violation
    Required,
    /// Absent input is omitted from the output
    Optional,
    /// Absent input is replaced by the declared value
    Default(FieldValue),
}

/// Format constraint applied to non-empty text values
///
/// Empty strings are exempt: an optional email may be submitted blank and
/// passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Value must look like an email address
    Email,
    /// Short code with a fixed maximum length, e.g. a region abbreviation
    Code { max: usize },
}

/// One named constraint-and-coercion rule within a schema
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: String,
    pub kind: FieldKind,
    pub requirement: Requirement,
    pub min_chars: Option<usize>,
    pub max_chars: Option<usize>,
    pub format: Option<Format>,
    /// Treat empty string, null and NaN as if the key were missing
    pub empty_as_missing: bool,
}

impl FieldRule {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            requirement: Requirement::Optional,
            min_chars: None,
            max_chars: None,
            format: None,
            empty_as_missing: false,
        }
    }

    /// Optional text field
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Optional numeric field
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Optional boolean field
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    /// Absent input becomes a violation
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    /// Absent input is filled with `value`
    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.requirement = Requirement::Default(value.into());
        self
    }

    /// Minimum length in characters
    pub fn min_chars(mut self, min: usize) -> Self {
        self.min_chars = Some(min);
        self
    }

    /// Maximum length in characters
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Non-empty values must look like an email address
    pub fn email(mut self) -> Self {
        self.format = Some(Format::Email);
        self
    }

    /// Non-empty values must be a code of at most `max` characters
    pub fn code(mut self, max: usize) -> Self {
        self.format = Some(Format::Code { max });
        self
    }

    /// Map empty string, null and NaN input to "absent" before checking
    pub fn empty_as_missing(mut self) -> Self {
        self.empty_as_missing = true;
        self
    }
}
