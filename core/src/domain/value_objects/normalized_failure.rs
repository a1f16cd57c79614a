//! Classifier output

use std::collections::BTreeMap;

/// Canonical description of one failed request
///
/// Built once by the classifier, read by logging and by the sanitizer, then
/// dropped. `trace` is diagnostic context and only leaves the process in
/// development mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFailure {
    pub status_code: u16,
    pub kind: String,
    pub message: String,
    pub field_errors: Option<BTreeMap<String, String>>,
    pub trace: String,
}

impl NormalizedFailure {
    pub fn new(status_code: u16, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code,
            kind: kind.into(),
            message: message.into(),
            field_errors: None,
            trace: String::new(),
        }
    }

    pub fn with_field_errors(mut self, field_errors: BTreeMap<String, String>) -> Self {
        self.field_errors = Some(field_errors);
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = trace.into();
        self
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code >= 500
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }
}
