//! Tests for error classification
