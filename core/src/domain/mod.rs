//! Domain layer containing the value objects of the failure pipeline.

pub mod value_objects;

// Re-export commonly used domain types
pub use value_objects::*;
