use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::{Message, NewTask, Task, TaskUpdate};

/// Tasks can be scoped to a project, to a whole workspace, or neither.
#[derive(Clone, Debug, Default)]
pub struct TaskFilter {
    pub workspace_id: Option<String>,
    pub project_id: Option<String>,
}

pub async fn list(client: &ApiClient, filter: &TaskFilter) -> Result<Vec<Task>, ClientError> {
    let mut query: Vec<(&str, &str)> = Vec::new();
    if let Some(workspace_id) = filter.workspace_id.as_deref() {
        query.push(("workspace_id", workspace_id));
    }
    if let Some(project_id) = filter.project_id.as_deref() {
        query.push(("project_id", project_id));
    }
    client.get_json("/tasks", &query).await
}

pub async fn create(client: &ApiClient, task: &NewTask) -> Result<Task, ClientError> {
    client.post_json("/tasks", task).await
}

pub async fn update(
    client: &ApiClient,
    task_id: &str,
    update: &TaskUpdate,
) -> Result<Message, ClientError> {
    client.put_json(&format!("/tasks/{task_id}"), update).await
}

pub async fn delete(client: &ApiClient, task_id: &str) -> Result<Message, ClientError> {
    client.delete_json(&format!("/tasks/{task_id}")).await
}
