//! Value objects passed between classification, logging and sanitization.

pub mod normalized_failure;
pub mod request_context;

// Re-export commonly used types
pub use normalized_failure::NormalizedFailure;
pub use request_context::RequestContext;
