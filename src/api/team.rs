use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::TeamMember;

/// Workspace members with per-member workload counts.
pub async fn list(client: &ApiClient, workspace_id: &str) -> Result<Vec<TeamMember>, ClientError> {
    client.get_json("/team", &[("workspace_id", workspace_id)]).await
}
