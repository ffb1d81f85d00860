//! Notes models and DTOs
//!
//! All entities are immutable value snapshots: once returned, the caller owns
//! them and the client keeps nothing. Wire field names are the snake_case
//! names used here, exactly as the server delivers them.

use serde::{Deserialize, Serialize};

/// Minimal identity of a note.
///
/// `id` is an opaque stable identifier; `slug` is the URL-safe human-readable
/// one, stable across edits unless explicitly changed. They are never both
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
}

/// A row of the notes list: summary plus the last-edit timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub updated_at: String,
}

/// A directed, typed relationship between two notes.
///
/// The destination falls in exactly one class: internal (`to_id` set),
/// external (`url` set), or dangling (both absent). `kind` is an open
/// vocabulary owned by the server. The denormalized `to_note`/`from_note`
/// summary is supplied only on the side not already known from query context;
/// when it is absent the endpoint is unresolved and must not be re-derived
/// from the raw id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLink {
    pub id: String,
    pub kind: String,
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
    pub from_id: String,
    #[serde(default)]
    pub to_id: Option<String>,
    #[serde(default)]
    pub to_note: Option<NoteSummary>,
    #[serde(default)]
    pub from_note: Option<NoteSummary>,
}

impl NoteLink {
    /// Display text for the link's far endpoint when following it outward:
    /// the resolved note's title, else the raw target id, else "unknown".
    pub fn endpoint_label(&self) -> &str {
        if let Some(note) = &self.to_note {
            return &note.title;
        }
        match &self.to_id {
            Some(id) => id,
            None => "unknown",
        }
    }
}

/// A full note: identity plus body, tags, mentions, and both link directions.
///
/// `body` is the raw text; link and mention extraction from it happens
/// server-side. `tags` and `mentions` keep the delivered order for display.
/// `updated_at` is monotonically non-decreasing across edits to the same note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mentions: Vec<String>,
    #[serde(default)]
    pub incoming_links: Vec<NoteLink>,
    #[serde(default)]
    pub outgoing_links: Vec<NoteLink>,
    pub updated_at: String,
}

impl Note {
    /// The note's summary fields, for places that only need identity.
    pub fn summary(&self) -> NoteSummary {
        NoteSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// A note's immediate hierarchical neighborhood.
///
/// The server owns what makes a note a parent/child/sibling of another.
/// `focus.id` never appears in the three sequences, and each sequence is free
/// of duplicate ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainView {
    pub focus: NoteSummary,
    #[serde(default)]
    pub parents: Vec<NoteSummary>,
    #[serde(default)]
    pub children: Vec<NoteSummary>,
    #[serde(default)]
    pub siblings: Vec<NoteSummary>,
}

/// Input for the create/update mutations. Validated server-side; the client
/// only guarantees the non-null fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
