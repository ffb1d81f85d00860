//! HTTP transport implementation
//!
//! POSTs `{"query": ..., "variables": ...}` as JSON to the configured
//! endpoint and unwraps the response envelope. Credentials are out of scope:
//! a cookie/session layer is assumed to attach them transparently, so no auth
//! headers are set here.

use crate::config::ClientConfig;
use crate::transport::error::GqlError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Abstraction over the GraphQL wire call, so typed operations can be tested
/// against a scripted transport without a server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one GraphQL document with its variables and return the
    /// envelope's `data` field verbatim.
    async fn send(&self, query: &str, variables: Value) -> Result<Value, GqlError>;
}

/// Request body of the GraphQL-over-HTTP contract.
#[derive(Debug, Serialize)]
struct GqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

/// Transport backed by a shared `reqwest::Client`.
///
/// Thread-safe and cheaply cloneable. Each call is one independent request;
/// issuing the same query twice concurrently produces two network requests.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport targeting the configured endpoint.
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    /// Endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, query: &str, variables: Value) -> Result<Value, GqlError> {
        debug!(endpoint = %self.endpoint, "Sending GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The status code is the primary signal; the body is still read
            // so a server-reported message can ride along as detail.
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|envelope| first_error_message(&envelope).map(str::to_string));
            warn!(status = status.as_u16(), "GraphQL request failed");
            return Err(GqlError::Transport {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        let envelope: Value = serde_json::from_str(&body)?;
        unwrap_envelope(envelope)
    }
}

/// Unwrap a parsed GraphQL envelope: surface the first reported error, or
/// hand back `data` untouched.
pub(crate) fn unwrap_envelope(mut envelope: Value) -> Result<Value, GqlError> {
    if let Some(message) = first_error_message(&envelope) {
        warn!(message, "GraphQL envelope reported an error");
        return Err(GqlError::application(Some(message)));
    }
    if envelope
        .get("errors")
        .and_then(Value::as_array)
        .is_some_and(|errors| !errors.is_empty())
    {
        // Non-empty errors array whose first entry lacks a message.
        return Err(GqlError::application(None));
    }

    Ok(envelope
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null))
}

/// First error message in the envelope, if any.
fn first_error_message(envelope: &Value) -> Option<&str> {
    envelope
        .get("errors")?
        .as_array()?
        .first()?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_returns_data_verbatim() {
        let data = json!({"notes": [{"id": "1", "title": "T", "slug": "t"}]});
        let envelope = json!({"data": data.clone()});
        assert_eq!(unwrap_envelope(envelope).unwrap(), data);
    }

    #[test]
    fn test_unwrap_empty_errors_array_is_success() {
        let envelope = json!({"data": {"ok": true}, "errors": []});
        assert_eq!(unwrap_envelope(envelope).unwrap(), json!({"ok": true}));
    }

    #[test]
    fn test_unwrap_missing_data_yields_null() {
        assert_eq!(unwrap_envelope(json!({})).unwrap(), Value::Null);
    }

    #[test]
    fn test_unwrap_surfaces_first_error_message() {
        let envelope = json!({
            "errors": [
                {"message": "first failure"},
                {"message": "second failure"}
            ]
        });
        match unwrap_envelope(envelope).unwrap_err() {
            GqlError::Application { message } => assert_eq!(message, "first failure"),
            other => panic!("expected Application error, got {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_falls_back_when_message_absent() {
        let envelope = json!({"errors": [{"path": ["note"]}]});
        match unwrap_envelope(envelope).unwrap_err() {
            GqlError::Application { message } => assert_eq!(message, "GraphQL error"),
            other => panic!("expected Application error, got {:?}", other),
        }
    }

    #[test]
    fn test_transport_holds_configured_endpoint() {
        let config = ClientConfig::new("http://example.test/graphql");
        let transport = HttpTransport::new(&config);
        assert_eq!(transport.endpoint(), "http://example.test/graphql");
    }
}
