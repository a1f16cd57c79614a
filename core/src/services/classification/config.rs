//! Configuration for the error classifier

use bw_shared::config::{DisclosureMode, ServerConfig};

/// Settings read once at startup and shared by every classification
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Disclosure policy; decides whether traces are logged for serialization
    pub mode: DisclosureMode,
    /// Body-size ceiling in bytes named in the payload-too-large message
    pub payload_limit_bytes: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: DisclosureMode::default(),
            payload_limit_bytes: 20 * 1024 * 1024,
        }
    }
}

impl ClassifierConfig {
    pub fn new(mode: DisclosureMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Take the payload ceiling from the server configuration
    pub fn for_server(mode: DisclosureMode, server: &ServerConfig) -> Self {
        Self {
            mode,
            payload_limit_bytes: server.max_payload_size,
        }
    }

    pub fn with_payload_limit_bytes(mut self, limit_bytes: usize) -> Self {
        self.payload_limit_bytes = limit_bytes;
        self
    }
}
