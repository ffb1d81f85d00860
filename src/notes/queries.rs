//! Query catalog
//!
//! The fixed set of GraphQL documents this client issues. Selection sets are
//! immutable and match the models in [`super::models`] exactly; there is no
//! field-selecting or interpolated query construction anywhere in the crate.

/// List notes, optionally limited and filtered by a search string.
pub const NOTES_QUERY: &str = "
  query Notes($limit: Int, $search: String) {
    notes(limit: $limit, search: $search) {
      id
      title
      slug
      updated_at
    }
  }
";

/// Fetch one note with both link directions and their resolved endpoints.
pub const NOTE_QUERY: &str = "
  query Note($id: ID!) {
    note(id: $id) {
      id
      title
      slug
      body
      updated_at
      tags
      mentions
      incoming_links {
        id
        kind
        label
        url
        from_id
        from_note {
          id
          title
          slug
        }
      }
      outgoing_links {
        id
        kind
        label
        url
        to_id
        to_note {
          id
          title
          slug
        }
      }
    }
  }
";

/// Fetch a note's hierarchical neighborhood (parents, children, siblings).
pub const BRAIN_QUERY: &str = "
  query BrainView($id: ID!, $related_limit: Int) {
    brain_view(id: $id, related_limit: $related_limit) {
      focus {
        id
        title
        slug
      }
      parents {
        id
        title
        slug
      }
      children {
        id
        title
        slug
      }
      siblings {
        id
        title
        slug
      }
    }
  }
";

/// Create a note from a server-validated input.
pub const CREATE_NOTE: &str = "
  mutation CreateNote($input: NoteInput!) {
    create_note(input: $input) {
      id
      title
      slug
    }
  }
";

/// Update an existing note.
pub const UPDATE_NOTE: &str = "
  mutation UpdateNote($id: ID!, $input: NoteInput!) {
    update_note(id: $id, input: $input) {
      id
      title
      slug
    }
  }
";
