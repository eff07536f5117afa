// File: src/schemas/company.rs
// Purpose: Validation schema for company form submissions

use once_cell::sync::Lazy;

use crate::rule::FieldRule;
use crate::schema::Schema;

static COMPANY: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "company",
        vec![
            FieldRule::text("name").required().min_chars(1).max_chars(200),
            FieldRule::text("cnpj"),
            FieldRule::text("phone"),
            // Optional, but a non-empty value must look like an email
            FieldRule::text("email").email(),
            FieldRule::text("address"),
            FieldRule::text("city"),
            FieldRule::text("state").code(2),
            FieldRule::text("zipCode"),
            FieldRule::flag("active").default_value(true),
        ],
    )
});

/// Schema for company records
pub fn company() -> &'static Schema {
    &COMPANY
}
