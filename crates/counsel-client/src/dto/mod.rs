//! Request and response DTOs for the backend API.

pub mod request;
pub mod response;

use counsel_core::error::AppError;

/// Flattens `validator` errors into a single validation [`AppError`].
pub fn validation_error(errors: validator::ValidationErrors) -> AppError {
    let mut parts: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => parts.push(message.to_string()),
                None => parts.push(format!("Invalid value for '{field}'")),
            }
        }
    }
    parts.sort();
    AppError::validation(parts.join("; "))
}
