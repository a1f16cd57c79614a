//! # Bulwark Core
//!
//! The error-translation layer: error taxonomy, ordered classification rules,
//! the disclosure policy applied to responses, and the forwarding boundary for
//! asynchronous handlers. Framework-agnostic; the HTTP binding lives in
//! `bw_api`.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
