//! Notegraph client
//!
//! Data-access layer for a personal note-taking application organized as a
//! linked graph of notes:
//! - Typed GraphQL operations (list, fetch, create, update, brain view)
//! - A single HTTP transport with a typed error taxonomy
//! - A pure projection from a note's neighborhood into a renderable graph
//!
//! The crate holds no state between calls: no cache, no session. Every value
//! it returns is an immutable snapshot owned by the caller.

pub mod brain;
pub mod config;
pub mod notes;
pub mod transport;

pub use brain::{project, BrainGraph, EndpointRef, GraphLink, GraphNode, LinkKind, NodeGroup};
pub use config::ClientConfig;
pub use notes::{BrainView, Note, NoteInput, NoteLink, NoteListItem, NoteSummary, NotesClient};
pub use transport::{GqlError, HttpTransport, Transport};
