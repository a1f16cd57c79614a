//! Client-facing error payload and the fixed wording it may carry

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON body returned for every failed request
///
/// `errors` appears only for validation failures and `stack` only when the
/// disclosure mode allows diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Error kind for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Field name to message, for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,

    /// Diagnostic trace (development only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
            errors: None,
            stack: None,
        }
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, String>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// Error kinds reported in the `error` field
pub mod error_kinds {
    pub const PAYLOAD_TOO_LARGE: &str = "PayloadTooLarge";
    pub const API_ERROR: &str = "ApiError";
    pub const VALIDATION_ERROR: &str = "ValidationError";
    pub const TOKEN_EXPIRED: &str = "TokenExpiredError";
    pub const INVALID_TOKEN: &str = "InvalidTokenError";
    pub const UNIQUENESS_CONFLICT: &str = "UniquenessConflict";
    pub const MALFORMED_IDENTIFIER: &str = "MalformedIdentifier";
    pub const SERVER_ERROR: &str = "ServerError";
    pub const BAD_REQUEST: &str = "BadRequest";
}

/// Fixed messages safe to show any client
pub mod messages {
    pub const FIELDS_INVALID: &str = "One or more fields are invalid";
    pub const INVALID_TOKEN: &str = "Invalid or expired token";
    pub const INVALID_ID: &str = "Invalid ID format";
    pub const RESOURCE_EXISTS: &str = "Resource already exists";
    pub const FALLBACK: &str = "An error occurred";
    pub const INTERNAL_ERROR: &str = "An internal server error occurred";
    pub const INVALID_REQUEST: &str = "Invalid request";
    pub const NOT_FOUND: &str = "Resource not found";

    /// Message for an oversized request body, naming the ceiling
    pub fn payload_too_large(limit_bytes: usize) -> String {
        format!(
            "Request payload too large. Maximum file size is {}. Please reduce the file size and try again.",
            format_size(limit_bytes)
        )
    }

    /// Size in the largest whole unit, rounded down so the ceiling is never overstated
    pub fn format_size(bytes: usize) -> String {
        const KB: usize = 1024;
        const MB: usize = 1024 * KB;
        match bytes {
            b if b >= MB => format!("{}MB", b / MB),
            b if b >= KB => format!("{}KB", b / KB),
            b => format!("{} bytes", b),
        }
    }

    /// Message for a duplicate value on a unique field
    pub fn already_exists(field: &str) -> String {
        format!("{} already exists", field)
    }
}
