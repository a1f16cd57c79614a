//! Shared configuration and wire types for Bulwark
//!
//! This crate provides the pieces every other crate agrees on:
//! - Configuration types (environment, disclosure mode, server limits, logging)
//! - The client-facing error payload and the fixed kind/message table
//! - Health check response types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DisclosureMode, Environment, LogFormat, LoggingConfig, ServerConfig};
pub use errors::{error_kinds, messages, ErrorResponse};
pub use types::{HealthResponse, HealthStatus};
