// File: src/schema.rs
// Purpose: Ordered field rule collections describing one entity type

use crate::rule::FieldRule;
use crate::validation::{self, Validation};
use crate::value::RawRecord;

/// Ordered collection of field rules for one entity type
///
/// Immutable once built and safe to share process-wide. Rule order decides
/// the order violations are reported in.
#[derive(Debug, Clone)]
pub struct Schema {
    entity: String,
    fields: Vec<FieldRule>,
}

impl Schema {
    /// Create a schema from an ordered rule list
    ///
    /// # Panics
    ///
    /// Panics if two rules share a field name. Schema construction happens
    /// once at startup; a duplicate is a programming error, not runtime
    /// input.
    pub fn new(entity: impl Into<String>, fields: Vec<FieldRule>) -> Self {
        for (index, rule) in fields.iter().enumerate() {
            if fields[..index].iter().any(|other| other.name == rule.name) {
                panic!("duplicate field rule '{}' in schema", rule.name);
            }
        }
        Self {
            entity: entity.into(),
            fields,
        }
    }

    /// Entity name this schema describes
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Rules in declaration order
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Look up a rule by field name
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Validate a raw record against this schema
    pub fn validate(&self, input: &RawRecord) -> Validation {
        validation::validate(self, input)
    }
}
