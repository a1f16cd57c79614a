//! Type definitions module
//!
//! - `response` - health check responses

pub mod response;

pub use response::{HealthResponse, HealthStatus};
