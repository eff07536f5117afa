// File: src/schemas/category.rs
// Purpose: Validation schema for category form submissions

use once_cell::sync::Lazy;

use crate::rule::FieldRule;
use crate::schema::Schema;

static CATEGORY: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "category",
        vec![
            FieldRule::text("name").required().min_chars(1).max_chars(100),
            FieldRule::text("description"),
            // Blank selects arrive as "", null or NaN and mean "no parent"
            FieldRule::number("parentId").empty_as_missing(),
            FieldRule::flag("active").default_value(true),
        ],
    )
});

/// Schema for category records
pub fn category() -> &'static Schema {
    &CATEGORY
}
