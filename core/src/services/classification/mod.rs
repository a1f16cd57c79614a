//! Error classification module
//!
//! Turns any `Failure` into a `NormalizedFailure` using a fixed precedence
//! chain of rules:
//! 1. payload too large
//! 2. domain error
//! 3. validation failure
//! 4. token failure
//! 5. uniqueness conflict
//! 6. malformed identifier
//! 7. fallback

mod config;
mod rules;
mod service;

#[cfg(test)]
mod tests;

pub use config::ClassifierConfig;
pub use rules::{apply as apply_rules, fallback, Rule, RuleId, RULES};
pub use service::{classify_failure, Classification, ErrorClassifier};

/// Individual rules, exposed for isolated testing and auditing
pub mod matchers {
    pub use super::rules::{
        domain, malformed_identifier, payload_too_large, token, uniqueness_conflict, validation,
    };
}
