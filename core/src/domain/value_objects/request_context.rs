//! Request metadata attached to failure logs

/// Placeholder logged when the client address is unknown
const UNKNOWN_CLIENT: &str = "-";

/// Where a failed request came from
///
/// Used for log lines only; classification never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    /// HTTP method, e.g. `POST`
    pub method: String,

    /// Request path including the query string
    pub path: String,

    /// Client address as reported by the server
    pub client_addr: Option<String>,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            client_addr: None,
        }
    }

    pub fn with_client_addr(mut self, addr: impl Into<String>) -> Self {
        self.client_addr = Some(addr.into());
        self
    }

    pub fn client(&self) -> &str {
        self.client_addr.as_deref().unwrap_or(UNKNOWN_CLIENT)
    }
}
