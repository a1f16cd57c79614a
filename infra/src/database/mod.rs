//! Database module - storage failures and identifier parsing
//!
//! - SQLx error mapping (unique violations, everything else unclassified)
//! - UUID identifier parsing with malformed-identifier errors

pub mod ids;
#[cfg(feature = "mysql")]
pub mod errors;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ids::parse_id;
#[cfg(feature = "mysql")]
pub use errors::duplicate_entry_field;
