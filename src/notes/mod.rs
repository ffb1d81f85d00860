//! Notes domain
//!
//! Typed models for notes and their links, the fixed GraphQL query catalog,
//! and the client exposing the five operations (list, get, brain view,
//! create, update).

pub mod client;
pub mod models;
pub mod queries;

pub use client::NotesClient;
pub use models::{BrainView, Note, NoteInput, NoteLink, NoteListItem, NoteSummary};
