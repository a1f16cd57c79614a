//! Tests for the error taxonomy

mod domain_error_tests;
mod raw_error_tests;
