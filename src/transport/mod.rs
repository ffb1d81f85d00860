//! GraphQL transport
//!
//! One HTTP POST per call against a single configured endpoint. The transport
//! unwraps the standard GraphQL-over-HTTP envelope (`{data, errors}`) and
//! surfaces failures through a typed taxonomy:
//!
//! - [`GqlError::Transport`] — non-success HTTP status
//! - [`GqlError::Application`] — envelope carries a non-empty `errors` array
//! - [`GqlError::Malformed`] — body is not valid JSON, or a result payload
//!   does not match its declared shape
//! - [`GqlError::Request`] — the request never produced a response
//!
//! No retries, no timeouts, no cancellation at this layer: a single
//! fire-and-wait request per call, with no shared mutable state between calls.

pub mod error;
pub mod http;

#[cfg(test)]
pub mod mock;

pub use error::GqlError;
pub use http::{HttpTransport, Transport};
