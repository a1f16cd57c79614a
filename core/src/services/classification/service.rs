//! Error classifier service

use std::sync::Arc;

use crate::domain::{NormalizedFailure, RequestContext};
use crate::errors::Failure;
use crate::services::logging::{ErrorLogEntry, FailureLogger, TracingFailureLogger};

use super::config::ClassifierConfig;
use super::rules::{self, RuleId};

/// Result of classifying one failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Normalized data for logging and sanitization
    pub failure: NormalizedFailure,
    /// Rule that claimed the failure
    pub rule: RuleId,
    /// Whether the input was a pre-vetted domain error
    pub from_domain: bool,
}

impl Classification {
    /// Payload-too-large responses are already safe and skip sanitization
    pub fn bypasses_sanitizer(&self) -> bool {
        self.rule == RuleId::PayloadTooLarge
    }
}

/// Maps failures to normalized data and logs each one
pub struct ErrorClassifier {
    config: ClassifierConfig,
    logger: Arc<dyn FailureLogger>,
}

impl ErrorClassifier {
    /// Create a classifier logging through `tracing`
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_logger(config, Arc::new(TracingFailureLogger))
    }

    pub fn with_logger(config: ClassifierConfig, logger: Arc<dyn FailureLogger>) -> Self {
        Self { config, logger }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `failure` and emit its log record
    ///
    /// `context` only feeds the log line.
    pub fn classify(&self, failure: &Failure, context: &RequestContext) -> Classification {
        let classification = classify_failure(failure, &self.config);
        self.log(failure, &classification, context);
        classification
    }

    fn log(&self, failure: &Failure, classification: &Classification, context: &RequestContext) {
        if classification.bypasses_sanitizer() {
            self.logger.warn(&format!(
                "413 - Payload too large - {} - {} - {}",
                context.path,
                context.method,
                context.client()
            ));
            return;
        }

        let line = format!(
            "{} - {} - {} - {} - {}",
            classification.failure.status_code,
            failure,
            context.path,
            context.method,
            context.client()
        );
        let stack = self
            .config
            .mode
            .is_development()
            .then(|| classification.failure.trace.as_str());
        self.logger.error(&ErrorLogEntry {
            status: classification.failure.status_code,
            line: &line,
            stack,
            operational: failure.is_operational(),
        });
    }
}

/// Pure classification without logging
pub fn classify_failure(failure: &Failure, config: &ClassifierConfig) -> Classification {
    let (rule, normalized) = rules::apply(failure, config);
    Classification {
        failure: normalized,
        rule,
        from_domain: failure.is_domain(),
    }
}
