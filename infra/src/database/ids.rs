//! Identifier parsing

use uuid::Uuid;

use bw_core::errors::RawError;

use crate::{IntoRawError, RawResultExt};

impl IntoRawError for uuid::Error {
    fn into_raw_error(self) -> RawError {
        RawError::malformed_identifier().with_source(&self)
    }
}

/// Parse a client-supplied identifier into a `Uuid`
pub fn parse_id(raw: &str) -> Result<Uuid, RawError> {
    Uuid::parse_str(raw.trim()).raw_err()
}
