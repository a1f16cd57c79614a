//! # Infrastructure adapters
//!
//! Third-party subsystems fail in their own vocabulary. This crate maps each
//! one onto `RawError` so the classifier can recognise it:
//!
//! - **Database**: SQLx errors; unique violations become uniqueness conflicts
//! - **Auth**: `jsonwebtoken` errors become token failures
//! - **Validation**: `validator` errors become per-field validation failures
//! - **Identifiers**: UUID parse errors become malformed identifiers
//!
//! ## Features
//!
//! - `mysql`: Enable the SQLx adapter (default)

use bw_core::errors::RawError;

/// Auth module - token verification failures
pub mod auth;

/// Database module - SQLx error mapping and identifier parsing
pub mod database;

/// Validation module - request validation failures
pub mod validation;

/// Conversion of a foreign error into an untrusted `RawError`
pub trait IntoRawError {
    fn into_raw_error(self) -> RawError;
}

/// `Result` helper for errors that have a `RawError` mapping
pub trait RawResultExt<T> {
    fn raw_err(self) -> Result<T, RawError>;
}

impl<T, E: IntoRawError> RawResultExt<T> for Result<T, E> {
    fn raw_err(self) -> Result<T, RawError> {
        self.map_err(IntoRawError::into_raw_error)
    }
}
