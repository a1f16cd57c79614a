//! SQLx error mapping
//!
//! MySQL reports unique violations as
//! `Duplicate entry 'alice@example.com' for key 'users.email'`; the conflicting
//! column is the part of the key name after the table prefix.

use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::error::DatabaseError;

use bw_core::errors::RawError;

use crate::IntoRawError;

static DUPLICATE_ENTRY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for key '([^']+)'").expect("duplicate entry pattern is valid"));

/// Column named in a MySQL duplicate-entry message, if any
pub fn duplicate_entry_field(message: &str) -> Option<String> {
    DUPLICATE_ENTRY_REGEX
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|key| strip_table(key.as_str()))
}

fn strip_table(key: &str) -> String {
    key.rsplit('.').next().unwrap_or(key).to_string()
}

fn conflicting_fields(err: &dyn DatabaseError) -> Vec<String> {
    err.constraint()
        .map(strip_table)
        .or_else(|| duplicate_entry_field(err.message()))
        .into_iter()
        .collect()
}

fn error_name(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::Database(_) => "DatabaseError",
        sqlx::Error::RowNotFound => "RowNotFound",
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => "PoolError",
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "DecodeError",
        _ => "SqlxError",
    }
}

impl IntoRawError for sqlx::Error {
    fn into_raw_error(self) -> RawError {
        match &self {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                let fields = conflicting_fields(&**db);
                tracing::debug!(?fields, "unique violation reported by database");
                RawError::duplicate_key(fields).with_source(&self)
            }
            _ => RawError::unclassified()
                .with_name(error_name(&self))
                .with_source(&self),
        }
    }
}
