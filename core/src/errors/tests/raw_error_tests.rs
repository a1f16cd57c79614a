//! Unit tests for raw error construction and capability probes

use std::fmt;

use crate::errors::{Failure, RawError, RawErrorKind, TokenFailure};

#[derive(Debug)]
struct DriverError {
    cause: Option<Box<DriverError>>,
    text: &'static str,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn std::error::Error + 'static))
    }
}

#[test]
fn test_size_limit_marker() {
    assert!(RawError::payload_too_large().is_size_limited());
    assert!(RawError::unclassified().with_status(413).is_size_limited());
    assert!(!RawError::unclassified().with_status(400).is_size_limited());
}

#[test]
fn test_validation_field_errors() {
    let error = RawError::validation()
        .with_field_error("email", "invalid")
        .with_field_error("name", "required");
    let fields = error.field_errors().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["email"], "invalid");

    assert!(RawError::validation().field_errors().is_none());
}

#[test]
fn test_field_errors_ignored_outside_validation() {
    let error = RawError::unclassified().with_field_error("email", "invalid");
    assert!(error.field_errors().is_none());
}

#[test]
fn test_token_and_duplicate_kinds() {
    assert_eq!(
        RawError::token_expired().kind(),
        &RawErrorKind::Token(TokenFailure::Expired)
    );
    assert_eq!(
        RawError::duplicate_key(["email", "phone"]).kind(),
        &RawErrorKind::DuplicateKey {
            fields: vec!["email".to_string(), "phone".to_string()]
        }
    );
}

#[test]
fn test_display_prefers_message_then_name() {
    assert_eq!(RawError::unclassified().with_message("boom").to_string(), "boom");
    assert_eq!(RawError::unclassified().with_name("TypeError").to_string(), "TypeError");
    assert_eq!(RawError::unclassified().to_string(), "unclassified error");
}

#[test]
fn test_source_chain_becomes_trace() {
    let err = DriverError {
        text: "query failed",
        cause: Some(Box::new(DriverError {
            text: "connection reset",
            cause: None,
        })),
    };
    let raw = RawError::from_error(&err);
    assert_eq!(raw.message(), Some("query failed"));
    assert_eq!(raw.trace(), "query failed\n    caused by: connection reset");
}

#[test]
fn test_synthesized_trace() {
    let raw = RawError::unclassified().with_name("TypeError").with_message("x is undefined");
    assert_eq!(raw.trace(), "TypeError: x is undefined");

    let failure = Failure::from(raw);
    assert!(!failure.is_domain());
    assert!(failure.is_operational());
    assert_eq!(failure.name(), Some("TypeError"));
}
