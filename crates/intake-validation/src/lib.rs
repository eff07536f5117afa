//! Intake Validation Core
//!
//! Pure validation predicates compatible with both std and no_std
//! environments. Used by server-side record validation and reusable from
//! WASM client-side builds.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod numeric;
pub mod string;

// Re-export all predicates
pub use numeric::*;
pub use string::*;
