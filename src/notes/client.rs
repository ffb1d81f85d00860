//! Typed GraphQL operations over a transport
//!
//! Each operation pairs a catalog document with its variables, sends it, and
//! narrows the untyped `data` payload into its declared result type. The
//! narrowing is the documented trust boundary: a payload that does not match
//! the declared shape surfaces as [`GqlError::Malformed`].

use crate::notes::models::{BrainView, Note, NoteInput, NoteListItem, NoteSummary};
use crate::notes::queries;
use crate::transport::{GqlError, Transport};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Client for the note-graph GraphQL operations.
///
/// Generic over [`Transport`] so operations can run against a scripted
/// transport in tests. Holds no state beyond the transport itself.
pub struct NotesClient<T: Transport> {
    transport: T,
}

impl<T: Transport> NotesClient<T> {
    /// Create a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// List notes, newest first, optionally limited and filtered by a search
    /// string.
    pub async fn list_notes(
        &self,
        limit: Option<i64>,
        search: Option<&str>,
    ) -> Result<Vec<NoteListItem>, GqlError> {
        let variables = json!({ "limit": limit, "search": search });
        let data = self.transport.send(queries::NOTES_QUERY, variables).await?;
        take_field(data, "notes")
    }

    /// Fetch one note with its resolved link endpoints. Returns `Ok(None)`
    /// when the server reports no note under that id.
    pub async fn get_note(&self, id: &str) -> Result<Option<Note>, GqlError> {
        let variables = json!({ "id": id });
        let data = self.transport.send(queries::NOTE_QUERY, variables).await?;
        take_field(data, "note")
    }

    /// Fetch the brain view for a note: its parents, children, and siblings.
    pub async fn brain_view(
        &self,
        id: &str,
        related_limit: Option<i64>,
    ) -> Result<BrainView, GqlError> {
        let variables = json!({ "id": id, "related_limit": related_limit });
        let data = self.transport.send(queries::BRAIN_QUERY, variables).await?;
        take_field(data, "brain_view")
    }

    /// Create a note. The input is validated server-side.
    pub async fn create_note(&self, input: &NoteInput) -> Result<NoteSummary, GqlError> {
        let variables = json!({ "input": input });
        let data = self.transport.send(queries::CREATE_NOTE, variables).await?;
        take_field(data, "create_note")
    }

    /// Update an existing note.
    pub async fn update_note(
        &self,
        id: &str,
        input: &NoteInput,
    ) -> Result<NoteSummary, GqlError> {
        let variables = json!({ "id": id, "input": input });
        let data = self.transport.send(queries::UPDATE_NOTE, variables).await?;
        take_field(data, "update_note")
    }
}

/// Pull one field out of the untyped payload and narrow it.
fn take_field<R: DeserializeOwned>(mut data: Value, field: &str) -> Result<R, GqlError> {
    let value = data.get_mut(field).map(Value::take).unwrap_or(Value::Null);
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    fn canned_note() -> Value {
        json!({
            "id": "1",
            "title": "T",
            "slug": "t",
            "body": "",
            "tags": [],
            "mentions": [],
            "incoming_links": [],
            "outgoing_links": [],
            "updated_at": "2024-01-01"
        })
    }

    #[tokio::test]
    async fn test_get_note_returns_typed_note() {
        let transport = MockTransport::with_envelope(json!({
            "data": { "note": canned_note() }
        }));
        let client = NotesClient::new(transport);

        let note = client.get_note("1").await.unwrap().unwrap();
        assert_eq!(serde_json::to_value(&note).unwrap(), canned_note());

        let calls = client.transport.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, json!({ "id": "1" }));
    }

    #[tokio::test]
    async fn test_get_note_null_is_none() {
        let transport = MockTransport::with_envelope(json!({ "data": { "note": null } }));
        let client = NotesClient::new(transport);
        assert_eq!(client.get_note("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_notes_narrows_rows() {
        let transport = MockTransport::with_envelope(json!({
            "data": { "notes": [
                {"id": "1", "title": "A", "slug": "a", "updated_at": "2024-01-02"},
                {"id": "2", "title": "B", "slug": "b", "updated_at": "2024-01-01"}
            ]}
        }));
        let client = NotesClient::new(transport);

        let notes = client.list_notes(Some(10), Some("a")).await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, "1");
        assert_eq!(notes[1].updated_at, "2024-01-01");

        let calls = client.transport.calls.lock().await;
        assert_eq!(calls[0].1, json!({ "limit": 10, "search": "a" }));
    }

    #[tokio::test]
    async fn test_brain_view_narrows_neighborhood() {
        let transport = MockTransport::with_envelope(json!({
            "data": { "brain_view": {
                "focus": {"id": "a", "title": "A", "slug": "a"},
                "parents": [{"id": "b", "title": "B", "slug": "b"}],
                "children": [],
                "siblings": []
            }}
        }));
        let client = NotesClient::new(transport);

        let view = client.brain_view("a", None).await.unwrap();
        assert_eq!(view.focus.id, "a");
        assert_eq!(view.parents.len(), 1);
        assert!(view.children.is_empty());
    }

    #[tokio::test]
    async fn test_create_note_sends_input_and_narrows_summary() {
        let transport = MockTransport::with_envelope(json!({
            "data": { "create_note": {"id": "9", "title": "New", "slug": "new"} }
        }));
        let client = NotesClient::new(transport);

        let input = NoteInput {
            title: "New".into(),
            body: "text".into(),
            tags: Some(vec!["inbox".into()]),
        };
        let created = client.create_note(&input).await.unwrap();
        assert_eq!(created.id, "9");

        let calls = client.transport.calls.lock().await;
        assert_eq!(
            calls[0].1,
            json!({ "input": {"title": "New", "body": "text", "tags": ["inbox"]} })
        );
    }

    #[tokio::test]
    async fn test_update_note_sends_id_and_input() {
        let transport = MockTransport::with_envelope(json!({
            "data": { "update_note": {"id": "1", "title": "T2", "slug": "t"} }
        }));
        let client = NotesClient::new(transport);

        let input = NoteInput {
            title: "T2".into(),
            body: "edited".into(),
            tags: None,
        };
        let updated = client.update_note("1", &input).await.unwrap();
        assert_eq!(updated.title, "T2");

        let calls = client.transport.calls.lock().await;
        assert_eq!(
            calls[0].1,
            json!({ "id": "1", "input": {"title": "T2", "body": "edited"} })
        );
    }

    #[tokio::test]
    async fn test_application_error_propagates() {
        let transport = MockTransport::with_envelope(json!({
            "errors": [{"message": "note not found"}]
        }));
        let client = NotesClient::new(transport);

        match client.get_note("1").await.unwrap_err() {
            GqlError::Application { message } => assert_eq!(message, "note not found"),
            other => panic!("expected Application error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_malformed() {
        let transport = MockTransport::with_envelope(json!({
            "data": { "notes": "not-an-array" }
        }));
        let client = NotesClient::new(transport);

        assert!(matches!(
            client.list_notes(None, None).await.unwrap_err(),
            GqlError::Malformed(_)
        ));
    }
}
