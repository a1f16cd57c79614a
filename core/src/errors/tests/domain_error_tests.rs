//! Unit tests for domain error types

use crate::errors::{is_error_status, DomainError, Failure};

#[test]
fn test_domain_error_keeps_status_and_message() {
    let error = DomainError::forbidden("Not allowed");
    assert_eq!(error.status_code(), 403);
    assert_eq!(error.message(), "Not allowed");
    assert_eq!(error.name(), "ApiError");
    assert!(error.is_operational());
    assert_eq!(error.to_string(), "Not allowed");
}

#[test]
fn test_non_error_status_is_coerced() {
    assert_eq!(DomainError::new(200, "ok?").status_code(), 500);
    assert_eq!(DomainError::new(302, "moved").status_code(), 500);
    assert_eq!(DomainError::new(600, "nope").status_code(), 500);
    assert_eq!(DomainError::new(418, "teapot").status_code(), 418);
}

#[test]
fn test_error_status_range() {
    assert!(is_error_status(400));
    assert!(is_error_status(599));
    assert!(!is_error_status(399));
    assert!(!is_error_status(600));
}

#[test]
fn test_trace_starts_with_kind_and_message() {
    let error = DomainError::unauthorized("Token missing");
    assert!(error.origin_trace().starts_with("ApiError: Token missing"));

    let error = error.with_trace("custom trace");
    assert_eq!(error.origin_trace(), "custom trace");
}

#[test]
fn test_resource_not_found() {
    let error = DomainError::resource_not_found();
    assert_eq!(error.status_code(), 404);
    assert_eq!(error.message(), "Resource not found");
}

#[test]
fn test_non_operational_marker() {
    let failure = Failure::from(DomainError::internal("invariant broken").non_operational());
    assert!(failure.is_domain());
    assert!(!failure.is_operational());
    assert_eq!(failure.status_code(), Some(500));
}
