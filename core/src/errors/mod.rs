//! Error taxonomy consumed by classification
//!
//! - `DomainError` - raised deliberately, message safe to disclose
//! - `RawError` - from third-party subsystems, never disclosed as-is
//! - `Failure` - the union of both handed to the classifier

mod domain_error;
mod failure;
mod raw_error;

#[cfg(test)]
mod tests;

pub use domain_error::{is_error_status, DomainError};
pub use failure::{Failure, FailureResult};
pub use raw_error::{RawError, RawErrorKind, TokenFailure};
