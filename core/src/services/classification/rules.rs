//! Ordered classification rules
//!
//! Each rule inspects a `Failure` and either claims it or passes. Rules run in
//! the order of `RULES` and the first claim wins; `fallback` claims whatever
//! is left.

use bw_shared::errors::{error_kinds, messages};

use crate::domain::NormalizedFailure;
use crate::errors::{is_error_status, Failure, RawErrorKind, TokenFailure};

use super::config::ClassifierConfig;

/// Identifies which rule classified a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleId {
    PayloadTooLarge,
    Domain,
    Validation,
    Token,
    UniquenessConflict,
    MalformedIdentifier,
    Fallback,
}

/// A single matcher in the precedence chain
pub type Rule = fn(&Failure, &ClassifierConfig) -> Option<NormalizedFailure>;

/// Guarded rules in precedence order
pub const RULES: [(RuleId, Rule); 6] = [
    (RuleId::PayloadTooLarge, payload_too_large),
    (RuleId::Domain, domain),
    (RuleId::Validation, validation),
    (RuleId::Token, token),
    (RuleId::UniquenessConflict, uniqueness_conflict),
    (RuleId::MalformedIdentifier, malformed_identifier),
];

/// Size-limited errors: 413 with a message naming the ceiling
pub fn payload_too_large(failure: &Failure, config: &ClassifierConfig) -> Option<NormalizedFailure> {
    match failure {
        Failure::Raw(raw) if raw.is_size_limited() => Some(NormalizedFailure::new(
            413,
            error_kinds::PAYLOAD_TOO_LARGE,
            messages::payload_too_large(config.payload_limit_bytes),
        )),
        _ => None,
    }
}

/// Domain errors keep their own status, name and message
pub fn domain(failure: &Failure, _config: &ClassifierConfig) -> Option<NormalizedFailure> {
    match failure {
        Failure::Domain(err) => Some(
            NormalizedFailure::new(err.status_code(), err.name(), err.message())
                .with_trace(err.origin_trace()),
        ),
        _ => None,
    }
}

/// Validation failures: 400 with per-field messages when available
pub fn validation(failure: &Failure, _config: &ClassifierConfig) -> Option<NormalizedFailure> {
    let Failure::Raw(raw) = failure else {
        return None;
    };
    let RawErrorKind::Validation { field_errors } = raw.kind() else {
        return None;
    };
    let message = raw
        .message()
        .filter(|m| !m.is_empty())
        .unwrap_or(messages::FIELDS_INVALID);
    let mut normalized =
        NormalizedFailure::new(400, error_kinds::VALIDATION_ERROR, message).with_trace(raw.trace());
    if let Some(fields) = field_errors {
        normalized = normalized.with_field_errors(fields.clone());
    }
    Some(normalized)
}

/// Token failures: 401 with a fixed message that never says why
pub fn token(failure: &Failure, _config: &ClassifierConfig) -> Option<NormalizedFailure> {
    let Failure::Raw(raw) = failure else {
        return None;
    };
    let RawErrorKind::Token(reason) = raw.kind() else {
        return None;
    };
    let default_kind = match reason {
        TokenFailure::Expired => error_kinds::TOKEN_EXPIRED,
        TokenFailure::Invalid => error_kinds::INVALID_TOKEN,
    };
    Some(
        NormalizedFailure::new(
            401,
            raw.name().unwrap_or(default_kind),
            messages::INVALID_TOKEN,
        )
        .with_trace(raw.trace()),
    )
}

/// Unique-key violations: 400 naming only the first conflicting field
pub fn uniqueness_conflict(failure: &Failure, _config: &ClassifierConfig) -> Option<NormalizedFailure> {
    let Failure::Raw(raw) = failure else {
        return None;
    };
    let RawErrorKind::DuplicateKey { fields } = raw.kind() else {
        return None;
    };
    let message = match fields.first() {
        Some(field) => messages::already_exists(field),
        None => messages::RESOURCE_EXISTS.to_string(),
    };
    Some(
        NormalizedFailure::new(
            400,
            raw.name().unwrap_or(error_kinds::UNIQUENESS_CONFLICT),
            message,
        )
        .with_trace(raw.trace()),
    )
}

/// Identifiers that failed to parse: 400 with a fixed message
pub fn malformed_identifier(failure: &Failure, _config: &ClassifierConfig) -> Option<NormalizedFailure> {
    match failure {
        Failure::Raw(raw) if matches!(raw.kind(), RawErrorKind::MalformedIdentifier) => Some(
            NormalizedFailure::new(
                400,
                raw.name().unwrap_or(error_kinds::MALFORMED_IDENTIFIER),
                messages::INVALID_ID,
            )
            .with_trace(raw.trace()),
        ),
        _ => None,
    }
}

/// Everything else: own status if it is an error status, else 500
pub fn fallback(failure: &Failure) -> NormalizedFailure {
    let status = failure
        .status_code()
        .filter(|code| is_error_status(*code))
        .unwrap_or(500);
    let message = failure
        .message()
        .filter(|m| !m.is_empty())
        .unwrap_or(messages::FALLBACK);
    NormalizedFailure::new(
        status,
        failure.name().unwrap_or(error_kinds::SERVER_ERROR),
        message,
    )
    .with_trace(failure.trace())
}

/// Run the precedence chain and report which rule matched
pub fn apply(failure: &Failure, config: &ClassifierConfig) -> (RuleId, NormalizedFailure) {
    RULES
        .iter()
        .find_map(|(id, rule)| rule(failure, config).map(|normalized| (*id, normalized)))
        .unwrap_or_else(|| (RuleId::Fallback, fallback(failure)))
}
