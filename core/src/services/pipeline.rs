//! Classify → log → sanitize, once per failed request

use std::sync::Arc;

use bw_shared::config::DisclosureMode;
use bw_shared::errors::ErrorResponse;

use crate::domain::RequestContext;
use crate::errors::Failure;
use crate::services::classification::{Classification, ClassifierConfig, ErrorClassifier};
use crate::services::logging::FailureLogger;
use crate::services::sanitizer;

/// Status and body to send for one failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReply {
    pub status: u16,
    pub body: ErrorResponse,
}

/// The whole error-translation layer behind one call
pub struct ErrorPipeline {
    classifier: ErrorClassifier,
}

impl ErrorPipeline {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: ErrorClassifier::new(config),
        }
    }

    pub fn with_logger(config: ClassifierConfig, logger: Arc<dyn FailureLogger>) -> Self {
        Self {
            classifier: ErrorClassifier::with_logger(config, logger),
        }
    }

    pub fn mode(&self) -> DisclosureMode {
        self.classifier.config().mode
    }

    /// Translate `failure` into exactly one reply
    pub fn handle(&self, failure: &Failure, context: &RequestContext) -> ErrorReply {
        let classification = self.classifier.classify(failure, context);
        reply_for(&classification, self.mode())
    }
}

/// Apply the disclosure policy to an already classified failure
pub fn reply_for(classification: &Classification, mode: DisclosureMode) -> ErrorReply {
    let body = if classification.bypasses_sanitizer() {
        sanitizer::passthrough(&classification.failure)
    } else {
        sanitizer::sanitize(&classification.failure, classification.from_domain, mode)
    };
    ErrorReply {
        status: classification.failure.status_code,
        body,
    }
}
