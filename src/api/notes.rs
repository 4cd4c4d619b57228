use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::{Message, NewNote, Note, NoteUpdate};

pub async fn list(client: &ApiClient, workspace_id: &str) -> Result<Vec<Note>, ClientError> {
    client.get_json("/notes", &[("workspace_id", workspace_id)]).await
}

pub async fn create(client: &ApiClient, note: &NewNote) -> Result<Note, ClientError> {
    client.post_json("/notes", note).await
}

pub async fn update(
    client: &ApiClient,
    note_id: &str,
    update: &NoteUpdate,
) -> Result<Message, ClientError> {
    client.put_json(&format!("/notes/{note_id}"), update).await
}

pub async fn delete(client: &ApiClient, note_id: &str) -> Result<Message, ClientError> {
    client.delete_json(&format!("/notes/{note_id}")).await
}
