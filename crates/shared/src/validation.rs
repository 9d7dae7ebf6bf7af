//! Common validation utilities.

use validator::ValidationError;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

/// Validates that a value is non-empty after trimming whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("This field is required".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a value is non-empty. Whitespace-only values pass;
/// the state selector submits either an empty string or a code.
pub fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("This field is required".into());
        return Err(err);
    }
    Ok(())
}

/// Validates email shape (`local@domain.tld`). Empty values pass since
/// the email field is optional.
pub fn email_shape_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email_shape");
        err.message = Some("Please enter a valid email address".into());
        Err(err)
    }
}
