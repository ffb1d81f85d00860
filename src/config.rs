//! Client configuration
//!
//! The GraphQL endpoint is resolved once at construction and passed
//! explicitly to the transport, never read ambiently per call.
//!
//! Configuration via environment variables:
//! - `NOTEGRAPH_API_URL` (default: `http://localhost:8080/api/graphql`)

/// Default endpoint when `NOTEGRAPH_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/graphql";

/// Configuration for the GraphQL client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute URL of the GraphQL endpoint.
    pub endpoint: String,
}

impl ClientConfig {
    /// Create a config targeting an explicit endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Resolve the endpoint from `NOTEGRAPH_API_URL`, falling back to the
    /// default local server address.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("NOTEGRAPH_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { endpoint }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_URL.to_string(),
        }
    }
}
