use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Validate that a value is an integer greater than zero.
pub fn validate_positive_integer(value: i64, name: &str) -> Result<()> {
    if value <= 0 {
        return Err(Error::Validation(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(())
}

/// Validate an age range.
///
/// The min/max message names both bounds so callers can surface them.
pub fn validate_age_range(min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(Error::Validation(format!(
            "Max {max} should be greater than min {min}."
        )));
    }
    if min < 0 || max < 0 {
        return Err(Error::Validation("Age cannot be negative".to_string()));
    }
    if max > 150 {
        return Err(Error::Validation("Age cannot exceed 150".to_string()));
    }
    Ok(())
}

/// Check the `local@domain.tld` shape. Not full RFC validation; used as an
/// internal self-check after generation.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Validate that a value is not negative.
pub fn validate_non_negative(value: f64, name: &str) -> Result<()> {
    if value < 0.0 {
        return Err(Error::Validation(format!(
            "{name} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Validate that a string contains non-whitespace content.
pub fn validate_non_empty_string(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!(
            "{name} must be a non-empty string"
        )));
    }
    Ok(())
}

/// Validate that a value lies within an inclusive range.
pub fn validate_range(value: f64, min: f64, max: f64, name: &str) -> Result<()> {
    if value < min || value > max {
        return Err(Error::Validation(format!(
            "{name} must be between {min} and {max}"
        )));
    }
    Ok(())
}
