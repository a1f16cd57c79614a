//! Tests for the database adapters
