use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::{Message, NewRequest, RequestItem, RequestUpdate};

pub async fn list(client: &ApiClient, workspace_id: &str) -> Result<Vec<RequestItem>, ClientError> {
    client.get_json("/requests", &[("workspace_id", workspace_id)]).await
}

pub async fn create(client: &ApiClient, request: &NewRequest) -> Result<RequestItem, ClientError> {
    client.post_json("/requests", request).await
}

pub async fn update(
    client: &ApiClient,
    request_id: &str,
    update: &RequestUpdate,
) -> Result<Message, ClientError> {
    client.put_json(&format!("/requests/{request_id}"), update).await
}

pub async fn delete(client: &ApiClient, request_id: &str) -> Result<Message, ClientError> {
    client.delete_json(&format!("/requests/{request_id}")).await
}
