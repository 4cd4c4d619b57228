use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::{Message, NewProject, Project, ProjectUpdate};

pub async fn list(client: &ApiClient, workspace_id: &str) -> Result<Vec<Project>, ClientError> {
    client.get_json("/projects", &[("workspace_id", workspace_id)]).await
}

pub async fn get(client: &ApiClient, project_id: &str) -> Result<Project, ClientError> {
    client.get_json(&format!("/projects/{project_id}"), &[]).await
}

pub async fn create(client: &ApiClient, project: &NewProject) -> Result<Project, ClientError> {
    client.post_json("/projects", project).await
}

pub async fn update(
    client: &ApiClient,
    project_id: &str,
    update: &ProjectUpdate,
) -> Result<Message, ClientError> {
    client.put_json(&format!("/projects/{project_id}"), update).await
}

/// Deleting a project also deletes its tasks server-side; client lists
/// are simply refetched.
pub async fn delete(client: &ApiClient, project_id: &str) -> Result<Message, ClientError> {
    client.delete_json(&format!("/projects/{project_id}")).await
}
