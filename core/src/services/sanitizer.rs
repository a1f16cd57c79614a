//! Response sanitizer
//!
//! Applies the disclosure policy to a `NormalizedFailure` and produces the
//! client-facing body. Pure: the mode is a parameter, never read from the
//! environment.

use bw_shared::config::DisclosureMode;
use bw_shared::errors::{error_kinds, messages, ErrorResponse};

use crate::domain::NormalizedFailure;

/// Build the response body for `failure` under `mode`
///
/// In production a 5xx becomes an opaque `ServerError`, and a 4xx that did not
/// come from a domain error becomes a generic `BadRequest` with no field
/// detail. Development attaches the trace and changes nothing else.
pub fn sanitize(
    failure: &NormalizedFailure,
    was_domain_error: bool,
    mode: DisclosureMode,
) -> ErrorResponse {
    let mut response = ErrorResponse::new(failure.kind.as_str(), failure.message.as_str());
    if let Some(fields) = &failure.field_errors {
        response = response.with_errors(fields.clone());
    }

    match mode {
        DisclosureMode::Development => response.with_stack(failure.trace.as_str()),
        DisclosureMode::Production => {
            if failure.is_server_error() {
                ErrorResponse::new(error_kinds::SERVER_ERROR, messages::INTERNAL_ERROR)
            } else if failure.is_client_error() && !was_domain_error {
                ErrorResponse::new(error_kinds::BAD_REQUEST, messages::INVALID_REQUEST)
            } else {
                response
            }
        }
    }
}

/// Body for failures whose message is already safe and specific
/// (payload too large): no trace in any mode
pub fn passthrough(failure: &NormalizedFailure) -> ErrorResponse {
    ErrorResponse::new(failure.kind.as_str(), failure.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn validation_failure() -> NormalizedFailure {
        let mut fields = BTreeMap::new();
        fields.insert("email".to_string(), "invalid".to_string());
        NormalizedFailure::new(400, "ValidationError", "One or more fields are invalid")
            .with_field_errors(fields)
            .with_trace("ValidationError: email invalid")
    }

    #[test]
    fn test_production_hides_server_faults() {
        let failure = NormalizedFailure::new(500, "SqlxError", "relation users does not exist")
            .with_trace("SqlxError at db.rs:42");
        for from_domain in [true, false] {
            let response = sanitize(&failure, from_domain, DisclosureMode::Production);
            assert_eq!(response.error, "ServerError");
            assert_eq!(response.message, "An internal server error occurred");
            assert!(response.stack.is_none());
            assert!(response.errors.is_none());
            assert!(!response.success);
        }
    }

    #[test]
    fn test_production_generic_bad_request_for_raw_4xx() {
        let response = sanitize(&validation_failure(), false, DisclosureMode::Production);
        assert_eq!(response, ErrorResponse::new("BadRequest", "Invalid request"));
    }

    #[test]
    fn test_production_domain_4xx_passes_through() {
        let failure = NormalizedFailure::new(403, "ApiError", "Not allowed").with_trace("trace");
        let response = sanitize(&failure, true, DisclosureMode::Production);
        assert_eq!(response, ErrorResponse::new("ApiError", "Not allowed"));
    }

    #[test]
    fn test_development_attaches_trace_and_fields() {
        let response = sanitize(&validation_failure(), false, DisclosureMode::Development);
        assert_eq!(response.error, "ValidationError");
        assert_eq!(response.errors.as_ref().unwrap()["email"], "invalid");
        assert_eq!(response.stack.as_deref(), Some("ValidationError: email invalid"));
    }

    #[test]
    fn test_development_keeps_server_detail() {
        let failure = NormalizedFailure::new(502, "UpstreamError", "upstream reset")
            .with_trace("UpstreamError: upstream reset");
        let response = sanitize(&failure, false, DisclosureMode::Development);
        assert_eq!(response.error, "UpstreamError");
        assert_eq!(response.message, "upstream reset");
        assert!(response.stack.is_some());
    }

    #[test]
    fn test_passthrough_never_carries_stack() {
        let failure = NormalizedFailure::new(413, "PayloadTooLarge", "too big").with_trace("t");
        let response = passthrough(&failure);
        assert!(response.stack.is_none());
        assert_eq!(response.message, "too big");
    }
}
