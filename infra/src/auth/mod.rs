//! Auth module - token verification failures
//!
//! Expired signatures and every other rejection of a presented token map to
//! token failures. Key and algorithm problems are server misconfiguration and
//! stay unclassified so they surface as 5xx.

use jsonwebtoken::errors::ErrorKind;

use bw_core::errors::RawError;

use crate::IntoRawError;

impl IntoRawError for jsonwebtoken::errors::Error {
    fn into_raw_error(self) -> RawError {
        let raw = match self.kind() {
            ErrorKind::ExpiredSignature => RawError::token_expired(),
            ErrorKind::InvalidEcdsaKey | ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidKeyFormat => {
                RawError::unclassified().with_name("TokenConfigurationError")
            }
            _ => RawError::invalid_token(),
        };
        raw.with_source(&self)
    }
}
