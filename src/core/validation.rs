//! Input validation for hubkeys commands.
//!
//! Required-field and range checks shared by every command.

use crate::error::{Result, ValidationError};

/// Require a non-blank value for a named argument.
///
/// # Arguments
///
/// * `field` - The CLI flag name, reported on failure
/// * `value` - The bound value
///
/// # Errors
///
/// Returns `ValidationError::MissingField` if the value is empty or whitespace.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field }.into());
    }
    Ok(value)
}

/// Check an optional numeric argument against inclusive bounds.
///
/// `None` passes; the service applies its own default.
///
/// # Errors
///
/// Returns `ValidationError::OutOfRange` if the value is outside `bounds`.
pub fn check_range(field: &'static str, value: Option<i64>, bounds: (i64, i64)) -> Result<()> {
    let (min, max) = bounds;
    match value {
        Some(v) if v < min || v > max => Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value: v,
        }
        .into()),
        _ => Ok(()),
    }
}
