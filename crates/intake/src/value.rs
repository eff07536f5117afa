// File: src/value.rs
// Purpose: Raw input model for submitted records

use std::collections::HashMap;

/// Raw value types a submitted record may carry
///
/// Input is user-controlled and arrives untrusted: empty strings, nulls and
/// NaN sentinels are all representable and handled by the field rules, not
/// rejected up front.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<RawValue>),
    Object(HashMap<String, RawValue>),
}

impl RawValue {
    /// Type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Number(_) => "number",
            RawValue::String(_) => "string",
            RawValue::Array(_) => "array",
            RawValue::Object(_) => "object",
        }
    }

    /// Render the value for form redisplay
    pub fn to_display_string(&self) -> String {
        match self {
            RawValue::Null => String::new(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Number(n) => {
                // Format number nicely (remove .0 for integers)
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            RawValue::String(s) => s.clone(),
            RawValue::Array(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_display_string()).collect();
                format!("[{}]", rendered.join(", "))
            }
            RawValue::Object(_) => "[Object]".to_string(),
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::String(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => {
                // JSON numbers are always representable as f64 here; a
                // u64 outside f64 range loses precision, not validity
                RawValue::Number(n.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => RawValue::String(s),
            serde_json::Value::Array(items) => {
                RawValue::Array(items.into_iter().map(RawValue::from).collect())
            }
            serde_json::Value::Object(entries) => RawValue::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, RawValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// A submitted record before validation: field name to raw value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, RawValue>,
}

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Create a record from a prepared field map
    pub fn from_fields(fields: HashMap<String, RawValue>) -> Self {
        Self { fields }
    }

    /// Create a record from a JSON object payload
    ///
    /// Returns None when the payload is not a JSON object.
    pub fn from_json(payload: serde_json::Value) -> Option<Self> {
        match payload {
            serde_json::Value::Object(entries) => Some(Self {
                fields: entries
                    .into_iter()
                    .map(|(key, value)| (key, RawValue::from(value)))
                    .collect(),
            }),
            _ => None,
        }
    }

    /// Set a field value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }

    /// Access the underlying field map
    pub fn as_map(&self) -> &HashMap<String, RawValue> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
