//! The tagged union every failed request is reduced to

use thiserror::Error;

use super::{DomainError, RawError};

/// Either a deliberately raised domain error or an untrusted raw error
#[derive(Error, Debug, Clone)]
pub enum Failure {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Raw(#[from] RawError),
}

impl Failure {
    /// Whether the failure was raised deliberately with a pre-vetted message
    pub fn is_domain(&self) -> bool {
        matches!(self, Failure::Domain(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Failure::Domain(err) => Some(err.status_code()),
            Failure::Raw(err) => err.status_code(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Failure::Domain(err) => Some(err.name()),
            Failure::Raw(err) => err.name(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Failure::Domain(err) => Some(err.message()),
            Failure::Raw(err) => err.message(),
        }
    }

    /// Programming defects are domain errors explicitly marked non-operational
    pub fn is_operational(&self) -> bool {
        match self {
            Failure::Domain(err) => err.is_operational(),
            Failure::Raw(_) => true,
        }
    }

    pub fn trace(&self) -> String {
        match self {
            Failure::Domain(err) => err.origin_trace().to_string(),
            Failure::Raw(err) => err.trace(),
        }
    }
}

pub type FailureResult<T> = Result<T, Failure>;
