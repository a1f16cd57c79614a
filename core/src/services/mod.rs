//! Services of the failure pipeline.

pub mod boundary;
pub mod classification;
pub mod logging;
pub mod not_found;
pub mod pipeline;
pub mod sanitizer;

// Re-export commonly used types
pub use boundary::forward;
pub use classification::{Classification, ClassifierConfig, ErrorClassifier, RuleId};
pub use logging::{
    ErrorLogEntry, FailureLogger, LoggedFailure, MemoryFailureLogger, TracingFailureLogger,
};
pub use not_found::not_found;
pub use pipeline::{reply_for, ErrorPipeline, ErrorReply};
pub use sanitizer::sanitize;
