//! Scripted mock transport for testing typed operations without a server.

use crate::transport::error::GqlError;
use crate::transport::http::{unwrap_envelope, Transport};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// Answers every call with one canned envelope and records each call.
pub struct MockTransport {
    /// `(query, variables)` pairs, in call order.
    pub calls: Mutex<Vec<(String, Value)>>,
    envelope: Value,
}

impl MockTransport {
    /// Mock that answers every call with the same envelope.
    pub fn with_envelope(envelope: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            envelope,
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, query: &str, variables: Value) -> Result<Value, GqlError> {
        self.calls
            .lock()
            .await
            .push((query.to_string(), variables));
        unwrap_envelope(self.envelope.clone())
    }
}
