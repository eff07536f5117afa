// Intake - schema-driven validation for user-submitted records
// Validates and coerces raw form input before it reaches persistence

pub mod form_context;
pub mod record;
pub mod rule;
pub mod schema;
pub mod schemas;
pub mod validation;
pub mod value;
pub mod violation;

// Re-export the working set
pub use form_context::FormContext;
pub use record::{FieldValue, Record};
pub use rule::{FieldKind, FieldRule, Format, Requirement};
pub use schema::Schema;
pub use validation::{validate, Validation};
pub use value::{RawRecord, RawValue};
pub use violation::{Violation, ViolationKind};
