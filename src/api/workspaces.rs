use serde_json::json;

use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::{Message, NewWorkspace, Workspace, WorkspaceUpdate};

/// List every workspace the current user belongs to.
pub async fn list(client: &ApiClient) -> Result<Vec<Workspace>, ClientError> {
    client.get_json("/workspaces", &[]).await
}

pub async fn get(client: &ApiClient, workspace_id: &str) -> Result<Workspace, ClientError> {
    client.get_json(&format!("/workspaces/{workspace_id}"), &[]).await
}

pub async fn create(client: &ApiClient, workspace: &NewWorkspace) -> Result<Workspace, ClientError> {
    client.post_json("/workspaces", workspace).await
}

pub async fn update(
    client: &ApiClient,
    workspace_id: &str,
    update: &WorkspaceUpdate,
) -> Result<Message, ClientError> {
    client.put_json(&format!("/workspaces/{workspace_id}"), update).await
}

/// Invite an existing account into the workspace by email (owner only).
pub async fn invite(
    client: &ApiClient,
    workspace_id: &str,
    email: &str,
) -> Result<Message, ClientError> {
    client
        .post_json(&format!("/workspaces/{workspace_id}/invite"), &json!({ "email": email }))
        .await
}
