//! Failures at the HTTP edge
//!
//! Every error a handler or extractor produces is turned into an `ApiFailure`
//! carrying the `Failure` the pipeline classifies. Foreign errors keep their
//! own vocabulary until they reach the infra adapters.

use actix_web::error::{JsonPayloadError, PathError, PayloadError, QueryPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use bw_core::errors::{DomainError, Failure, RawError};
use bw_core::services::{self, classification::classify_failure, reply_for, ClassifierConfig, ErrorReply};
use bw_infra::IntoRawError;
use bw_shared::config::DisclosureMode;
use thiserror::Error;

use crate::dto::error::{reply_status, reply_to_response};

/// A failure on its way to the error handler middleware
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiFailure(Failure);

impl ApiFailure {
    pub fn failure(&self) -> &Failure {
        &self.0
    }

    pub fn into_failure(self) -> Failure {
        self.0
    }

    /// Production rendering with the default payload ceiling, used when no
    /// `ErrorHandlerMiddleware` is installed to replace it
    fn standalone_reply(&self) -> ErrorReply {
        let classification = classify_failure(&self.0, &ClassifierConfig::default());
        reply_for(&classification, DisclosureMode::Production)
    }
}

impl ResponseError for ApiFailure {
    fn status_code(&self) -> StatusCode {
        reply_status(&self.standalone_reply())
    }

    fn error_response(&self) -> HttpResponse {
        reply_to_response(&self.standalone_reply())
    }
}

impl From<Failure> for ApiFailure {
    fn from(failure: Failure) -> Self {
        Self(failure)
    }
}

impl From<DomainError> for ApiFailure {
    fn from(err: DomainError) -> Self {
        Self(err.into())
    }
}

impl From<RawError> for ApiFailure {
    fn from(err: RawError) -> Self {
        Self(err.into())
    }
}

impl From<sqlx::Error> for ApiFailure {
    fn from(err: sqlx::Error) -> Self {
        err.into_raw_error().into()
    }
}

impl From<jsonwebtoken::errors::Error> for ApiFailure {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        err.into_raw_error().into()
    }
}

impl From<validator::ValidationErrors> for ApiFailure {
    fn from(err: validator::ValidationErrors) -> Self {
        err.into_raw_error().into()
    }
}

impl From<uuid::Error> for ApiFailure {
    fn from(err: uuid::Error) -> Self {
        err.into_raw_error().into()
    }
}

impl From<JsonPayloadError> for ApiFailure {
    fn from(err: JsonPayloadError) -> Self {
        Self(json_payload_failure(&err))
    }
}

impl From<PathError> for ApiFailure {
    fn from(err: PathError) -> Self {
        Self(path_failure(&err))
    }
}

impl From<QueryPayloadError> for ApiFailure {
    fn from(err: QueryPayloadError) -> Self {
        Self(query_failure(&err))
    }
}

/// Recover the `Failure` behind any error actix attached to a response
pub fn failure_of(err: &actix_web::Error) -> Failure {
    if let Some(api) = err.as_error::<ApiFailure>() {
        return api.failure().clone();
    }
    if let Some(json) = err.as_error::<JsonPayloadError>() {
        return json_payload_failure(json);
    }
    if let Some(payload) = err.as_error::<PayloadError>() {
        return payload_failure(payload);
    }
    if let Some(form) = err.as_error::<UrlencodedError>() {
        return urlencoded_failure(form);
    }
    if let Some(path) = err.as_error::<PathError>() {
        return path_failure(path);
    }
    if let Some(query) = err.as_error::<QueryPayloadError>() {
        return query_failure(query);
    }

    let status = err.as_response_error().status_code();
    RawError::unclassified()
        .with_name("HttpError")
        .with_status(status.as_u16())
        .with_message(err.to_string())
        .into()
}

fn json_payload_failure(err: &JsonPayloadError) -> Failure {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            RawError::payload_too_large().with_source(err).into()
        }
        JsonPayloadError::Payload(payload) => payload_failure(payload),
        _ => RawError::unclassified()
            .with_name("JsonPayloadError")
            .with_status(err.status_code().as_u16())
            .with_source(err)
            .into(),
    }
}

fn payload_failure(err: &PayloadError) -> Failure {
    let raw = match err {
        PayloadError::Overflow => RawError::payload_too_large(),
        _ => RawError::unclassified()
            .with_name("PayloadError")
            .with_status(err.status_code().as_u16()),
    };
    raw.with_source(err).into()
}

fn urlencoded_failure(err: &UrlencodedError) -> Failure {
    let raw = match err {
        UrlencodedError::Overflow { .. } => RawError::payload_too_large(),
        _ => RawError::unclassified()
            .with_name("UrlencodedError")
            .with_status(err.status_code().as_u16()),
    };
    raw.with_source(err).into()
}

// Path segments on this service are resource identifiers
fn path_failure(err: &PathError) -> Failure {
    RawError::malformed_identifier().with_source(err).into()
}

fn query_failure(err: &QueryPayloadError) -> Failure {
    RawError::unclassified()
        .with_name("QueryPayloadError")
        .with_status(400)
        .with_source(err)
        .into()
}

/// `JsonConfig` error handler
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiFailure::from(err).into()
}

/// `PathConfig` error handler
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiFailure::from(err).into()
}

/// `QueryConfig` error handler
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiFailure::from(err).into()
}

/// Default service: no route matched
///
/// The requested path only reaches the log line, never the body.
pub async fn not_found() -> Result<HttpResponse, ApiFailure> {
    Err(services::not_found().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::errors::{RawErrorKind, TokenFailure};

    fn is_size_limited(failure: &Failure) -> bool {
        matches!(failure, Failure::Raw(raw) if raw.is_size_limited())
    }

    #[test]
    fn test_json_overflow_is_size_limited() {
        let failure = json_payload_failure(&JsonPayloadError::Overflow { limit: 1024 });
        assert!(is_size_limited(&failure));
    }

    #[test]
    fn test_json_known_length_overflow_is_size_limited() {
        let failure = json_payload_failure(&JsonPayloadError::OverflowKnownLength {
            length: 4096,
            limit: 1024,
        });
        assert!(is_size_limited(&failure));
    }

    #[test]
    fn test_json_syntax_error_keeps_status() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let failure = json_payload_failure(&JsonPayloadError::Deserialize(parse_error));
        assert_eq!(failure.status_code(), Some(400));
        assert_eq!(failure.name(), Some("JsonPayloadError"));
        assert!(!failure.is_domain());
    }

    #[test]
    fn test_payload_overflow_is_size_limited() {
        assert!(is_size_limited(&payload_failure(&PayloadError::Overflow)));
    }

    #[test]
    fn test_jwt_error_converts_to_token_failure() {
        let err = jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::ExpiredSignature);
        let failure = ApiFailure::from(err).into_failure();
        match failure {
            Failure::Raw(raw) => assert_eq!(raw.kind(), &RawErrorKind::Token(TokenFailure::Expired)),
            other => panic!("unexpected failure: {:?}", other),
        }
    }

    #[test]
    fn test_uuid_error_converts_to_malformed_identifier() {
        let err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let failure = ApiFailure::from(err).into_failure();
        match failure {
            Failure::Raw(raw) => assert_eq!(raw.kind(), &RawErrorKind::MalformedIdentifier),
            other => panic!("unexpected failure: {:?}", other),
        }
    }

    #[test]
    fn test_standalone_response_is_production_safe() {
        let failure = ApiFailure::from(RawError::unclassified().with_message("connection refused"));
        assert_eq!(failure.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let reply = failure.standalone_reply();
        assert_eq!(reply.body.error, "ServerError");
        assert_eq!(reply.body.message, "An internal server error occurred");
        assert!(reply.body.stack.is_none());
    }

    #[test]
    fn test_unknown_actix_error_keeps_its_status() {
        let err = actix_web::error::ErrorMethodNotAllowed("nope");
        let failure = failure_of(&err);
        assert_eq!(failure.status_code(), Some(405));
        assert!(!failure.is_domain());
    }

    #[test]
    fn test_api_failure_round_trips_through_actix_error() {
        let err: actix_web::Error = ApiFailure::from(DomainError::forbidden("Not allowed")).into();
        match failure_of(&err) {
            Failure::Domain(domain) => assert_eq!(domain.status_code(), 403),
            other => panic!("unexpected failure: {:?}", other),
        }
    }
}
