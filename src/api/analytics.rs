use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::DashboardStats;

pub async fn dashboard(
    client: &ApiClient,
    workspace_id: &str,
) -> Result<DashboardStats, ClientError> {
    client.get_json("/analytics/dashboard", &[("workspace_id", workspace_id)]).await
}
