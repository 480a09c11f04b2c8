use serde::Serialize;

use crate::error::AppError;

/// Trim a required text field, rejecting absent or whitespace-only values.
pub fn required_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::Validation(message.into()));
    }
    Ok(trimmed.to_string())
}

/// Acknowledgement body for operations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
