//! Failures coming from third-party subsystems
//!
//! Nothing on a `RawError` is trusted: its name, message and status are
//! inputs to classification, and only what the rules allow reaches clients.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::Write as _;

use thiserror::Error;

/// What the originating subsystem reported, as far as classification cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawErrorKind {
    /// A body-size limiter rejected the request
    PayloadTooLarge,
    /// Input validation failed, optionally per field
    Validation {
        field_errors: Option<BTreeMap<String, String>>,
    },
    /// A credential could not be verified
    Token(TokenFailure),
    /// Storage rejected a duplicate value on a unique key
    DuplicateKey { fields: Vec<String> },
    /// An identifier could not be parsed into the storage format
    MalformedIdentifier,
    /// Anything else
    Unclassified,
}

/// Why a token was rejected; never disclosed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFailure {
    Expired,
    Invalid,
}

/// Untrusted failure value awaiting classification
#[derive(Error, Debug, Clone)]
#[error("{}", describe(.name, .message))]
pub struct RawError {
    kind: RawErrorKind,
    name: Option<String>,
    status: Option<u16>,
    message: Option<String>,
    trace: Option<String>,
}

impl RawError {
    fn of_kind(kind: RawErrorKind) -> Self {
        Self {
            kind,
            name: None,
            status: None,
            message: None,
            trace: None,
        }
    }

    pub fn payload_too_large() -> Self {
        Self::of_kind(RawErrorKind::PayloadTooLarge)
    }

    /// Validation failure without per-field detail
    pub fn validation() -> Self {
        Self::of_kind(RawErrorKind::Validation { field_errors: None })
    }

    /// Validation failure carrying a field → message mapping
    pub fn validation_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let field_errors = fields
            .into_iter()
            .map(|(field, message)| (field.into(), message.into()))
            .collect();
        Self::of_kind(RawErrorKind::Validation {
            field_errors: Some(field_errors),
        })
    }

    pub fn token_expired() -> Self {
        Self::of_kind(RawErrorKind::Token(TokenFailure::Expired))
    }

    pub fn invalid_token() -> Self {
        Self::of_kind(RawErrorKind::Token(TokenFailure::Invalid))
    }

    /// Unique-key violation; `fields` in the order storage reported them
    pub fn duplicate_key<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        Self::of_kind(RawErrorKind::DuplicateKey {
            fields: fields.into_iter().map(Into::into).collect(),
        })
    }

    pub fn malformed_identifier() -> Self {
        Self::of_kind(RawErrorKind::MalformedIdentifier)
    }

    pub fn unclassified() -> Self {
        Self::of_kind(RawErrorKind::Unclassified)
    }

    /// Build an unclassified error from any `std::error::Error`
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        Self::unclassified().with_source(err)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Add one field error; only validation failures carry field detail
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        if let RawErrorKind::Validation { field_errors } = &mut self.kind {
            field_errors
                .get_or_insert_with(BTreeMap::new)
                .insert(field.into(), message.into());
        }
        self
    }

    /// Record the originating error: its text becomes the message (unless one
    /// was set) and its `source()` chain becomes the trace
    pub fn with_source(mut self, err: &(dyn StdError + 'static)) -> Self {
        if self.message.is_none() {
            self.message = Some(err.to_string());
        }
        self.trace = Some(render_chain(err));
        self
    }

    pub fn kind(&self) -> &RawErrorKind {
        &self.kind
    }

    /// True when a size limiter produced this error or it reports status 413
    pub fn is_size_limited(&self) -> bool {
        matches!(self.kind, RawErrorKind::PayloadTooLarge) || self.status == Some(413)
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match &self.kind {
            RawErrorKind::Validation { field_errors } => field_errors.as_ref(),
            _ => None,
        }
    }

    /// Diagnostic trace, synthesized from name and message when none was recorded
    pub fn trace(&self) -> String {
        match &self.trace {
            Some(trace) => trace.clone(),
            None => format!(
                "{}: {}",
                self.name.as_deref().unwrap_or("Error"),
                self.message.as_deref().unwrap_or_default()
            ),
        }
    }
}

fn describe(name: &Option<String>, message: &Option<String>) -> String {
    match (name, message) {
        (_, Some(message)) => message.clone(),
        (Some(name), None) => name.clone(),
        (None, None) => String::from("unclassified error"),
    }
}

fn render_chain(err: &(dyn StdError + 'static)) -> String {
    let mut trace = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(trace, "\n    caused by: {}", cause);
        source = cause.source();
    }
    trace
}
