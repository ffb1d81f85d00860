//! Error taxonomy for GraphQL operations

use thiserror::Error;

/// Fallback message when the server reports an error without a message.
pub const GENERIC_GRAPHQL_ERROR: &str = "GraphQL error";

/// Errors raised by the transport and by typed result narrowing.
#[derive(Debug, Error)]
pub enum GqlError {
    /// HTTP status outside the success range. The status code is the primary
    /// signal; `detail` carries the first envelope error message when the
    /// error body happened to parse.
    #[error("GraphQL request failed ({status})")]
    Transport {
        status: u16,
        detail: Option<String>,
    },

    /// HTTP success but the envelope's `errors` array is non-empty. Only the
    /// first error is surfaced.
    #[error("{message}")]
    Application { message: String },

    /// Response body is not valid JSON, or a payload does not match the
    /// operation's declared result shape.
    #[error("Malformed GraphQL response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The request failed before a response was received.
    #[error("GraphQL request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl GqlError {
    /// Build an application error from the server-reported message, falling
    /// back to the generic message when absent or empty.
    pub fn application(message: Option<&str>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_GRAPHQL_ERROR)
            .to_string();
        Self::Application { message }
    }
}
