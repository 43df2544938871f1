use crate::server::error::AppError;

/// Rejects empty or whitespace-only values for a required text field
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - The submitted value
///
/// # Returns
/// - `Ok(())` - The value contains non-whitespace characters
/// - `Err(AppError::BadRequest)` - The value is blank
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Same as `require_non_blank`, for fields of a partial update that may be absent
pub fn require_non_blank_if_present(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(value) => require_non_blank(field, value),
        None => Ok(()),
    }
}
