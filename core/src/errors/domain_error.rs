//! Errors raised deliberately by business logic
//!
//! A `DomainError` carries a status code and a message that was written for
//! clients, so both pass through classification untouched.

use std::backtrace::{Backtrace, BacktraceStatus};

use bw_shared::errors::{error_kinds, messages};
use thiserror::Error;

/// Status used when a caller supplies something that is not a 4xx/5xx code
const FALLBACK_STATUS: u16 = 500;

/// Whether `code` is an HTTP client or server error status
pub fn is_error_status(code: u16) -> bool {
    (400..=599).contains(&code)
}

/// Pre-vetted error with a client-safe message and explicit status
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct DomainError {
    status_code: u16,
    message: String,
    is_operational: bool,
    origin_trace: String,
}

impl DomainError {
    /// Create an operational error; a non-error status is coerced to 500
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let status_code = if is_error_status(status_code) {
            status_code
        } else {
            tracing::warn!(status_code, "domain error raised with non-error status, using 500");
            FALLBACK_STATUS
        };
        let origin_trace = capture_trace(&message);
        Self {
            status_code,
            message,
            is_operational: true,
            origin_trace,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    /// The generic "Resource not found" error, deliberately without the path
    pub fn resource_not_found() -> Self {
        Self::not_found(messages::NOT_FOUND)
    }

    /// Mark this error as a programming defect rather than an expected condition
    pub fn non_operational(mut self) -> Self {
        self.is_operational = false;
        self
    }

    /// Replace the captured trace, e.g. with one carried over from a lower layer
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.origin_trace = trace.into();
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    /// Declared name reported as the error kind
    pub fn name(&self) -> &'static str {
        error_kinds::API_ERROR
    }

    /// Diagnostic context; never serialized outside development mode
    pub fn origin_trace(&self) -> &str {
        &self.origin_trace
    }
}

fn capture_trace(message: &str) -> String {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => {
            format!("{}: {}\n{}", error_kinds::API_ERROR, message, backtrace)
        }
        _ => format!("{}: {}", error_kinds::API_ERROR, message),
    }
}
