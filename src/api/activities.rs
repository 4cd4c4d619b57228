use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::Activity;

/// The per-workspace activity feed, newest first.
pub async fn list(client: &ApiClient, workspace_id: &str) -> Result<Vec<Activity>, ClientError> {
    client.get_json("/activities", &[("workspace_id", workspace_id)]).await
}
