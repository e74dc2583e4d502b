//! Core contracts and helpers for Fixtura.
//!
//! This crate defines the error taxonomy and the input-validation helpers
//! shared by the generator crates.

pub mod error;
pub mod validation;

pub use error::{Error, Result};
pub use validation::{
    is_valid_email, validate_age_range, validate_non_empty_string, validate_non_negative,
    validate_positive_integer, validate_range,
};
