//! Logging collaborator for classified failures
//!
//! The classifier hands each failure to a `FailureLogger` exactly once. Where
//! the records end up is the implementation's business.

use std::sync::{Arc, Mutex};

/// One error-level record describing a classified failure
#[derive(Debug, Clone, Copy)]
pub struct ErrorLogEntry<'a> {
    /// Effective status after classification
    pub status: u16,
    /// `"{status} - {detail} - {path} - {method} - {client}"`
    pub line: &'a str,
    /// Diagnostic trace; `None` outside development mode
    pub stack: Option<&'a str>,
    /// False for domain errors marked as programming defects
    pub operational: bool,
}

/// Sink for failure log records
pub trait FailureLogger: Send + Sync {
    /// Lightweight record for the payload-too-large path
    fn warn(&self, line: &str);

    /// Record for every other classified failure
    fn error(&self, entry: &ErrorLogEntry<'_>);
}

/// Default logger emitting `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFailureLogger;

impl FailureLogger for TracingFailureLogger {
    fn warn(&self, line: &str) {
        tracing::warn!(target: "bulwark::failures", "{}", line);
    }

    fn error(&self, entry: &ErrorLogEntry<'_>) {
        match entry.stack {
            Some(stack) => tracing::error!(
                target: "bulwark::failures",
                status = entry.status,
                operational = entry.operational,
                stack = %stack,
                "{}",
                entry.line
            ),
            None => tracing::error!(
                target: "bulwark::failures",
                status = entry.status,
                operational = entry.operational,
                "{}",
                entry.line
            ),
        }
    }
}

/// Owned copy of a logged record, kept by `MemoryFailureLogger`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggedFailure {
    Warn {
        line: String,
    },
    Error {
        status: u16,
        line: String,
        stack: Option<String>,
        operational: bool,
    },
}

/// In-memory logger that keeps every record, for tests and diagnostics
#[derive(Debug, Default, Clone)]
pub struct MemoryFailureLogger {
    records: Arc<Mutex<Vec<LoggedFailure>>>,
}

impl MemoryFailureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn records(&self) -> Vec<LoggedFailure> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, record: LoggedFailure) {
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

impl FailureLogger for MemoryFailureLogger {
    fn warn(&self, line: &str) {
        self.push(LoggedFailure::Warn {
            line: line.to_string(),
        });
    }

    fn error(&self, entry: &ErrorLogEntry<'_>) {
        self.push(LoggedFailure::Error {
            status: entry.status,
            line: entry.line.to_string(),
            stack: entry.stack.map(str::to_string),
            operational: entry.operational,
        });
    }
}
