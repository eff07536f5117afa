// File: src/record.rs
// Purpose: Normalized record produced by successful validation

use serde::Serialize;
use std::collections::HashMap;

use crate::value::{RawRecord, RawValue};

/// A typed value in a normalized record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::Number(_) => "number",
            FieldValue::Bool(_) => "boolean",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert back to a raw value, e.g. to re-validate a normalized record
    pub fn to_raw(&self) -> RawValue {
        match self {
            FieldValue::Text(s) => RawValue::String(s.clone()),
            FieldValue::Number(n) => RawValue::Number(*n),
            FieldValue::Bool(b) => RawValue::Bool(*b),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Normalized output of a successful validation
///
/// Every value satisfies its field rule: coercions applied, defaults
/// filled, optional fields without a value omitted. Not mutated after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    #[serde(flatten)]
    values: HashMap<String, FieldValue>,
}

impl Record {
    pub(crate) fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value of a field, if present and textual
    pub fn text(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(FieldValue::as_text)
    }

    /// Numeric value of a field, if present and numeric
    pub fn number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(FieldValue::as_number)
    }

    /// Boolean value of a field, if present and boolean
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(FieldValue::as_bool)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert back into a raw record, e.g. to re-validate
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        for (name, value) in &self.values {
            raw.set(name.clone(), value.to_raw());
        }
        raw
    }

    /// JSON object for the persistence handoff
    pub fn to_json(&self) -> serde_json::Value {
        let entries = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        serde_json::Value::Object(entries)
    }
}
