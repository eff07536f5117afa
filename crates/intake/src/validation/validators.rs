// File: src/validation/validators.rs
// Purpose: Individual format validator functions

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a short code such as a 2-letter region abbreviation
pub fn is_valid_code(code: &str, max: usize) -> bool {
    intake_validation::has_max_chars(code, max)
}
