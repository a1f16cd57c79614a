//! Failure for requests that matched no route

use crate::errors::DomainError;

/// 404 "Resource not found"; the requested path is never echoed back
pub fn not_found() -> DomainError {
    DomainError::resource_not_found()
}
