//! Validation module - request validation failures
//!
//! `validator` reports a list of errors per field. Each field gets one human
//! message: the first explicit message, or one derived from the error code.

use validator::{ValidationError, ValidationErrors};

use bw_core::errors::RawError;

use crate::IntoRawError;

impl IntoRawError for ValidationErrors {
    fn into_raw_error(self) -> RawError {
        let fields: Vec<(String, String)> = self
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let field = field.to_string();
                let message = field_message(&field, errors);
                (field, message)
            })
            .collect();
        RawError::validation_fields(fields).with_trace(self.to_string())
    }
}

fn field_message(field: &str, errors: &[ValidationError]) -> String {
    if let Some(message) = errors.iter().find_map(|e| e.message.as_ref()) {
        return message.to_string();
    }
    match errors.first().map(|e| &*e.code) {
        Some("required") => format!("{} is required", field),
        Some("email") => format!("{} must be a valid email address", field),
        Some("length") => format!("{} has an invalid length", field),
        Some("range") => format!("{} is out of range", field),
        Some("url") => format!("{} must be a valid URL", field),
        _ => format!("{} is invalid", field),
    }
}
