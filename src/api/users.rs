use crate::error::ClientError;
use crate::net::client::ApiClient;
use crate::net::types::User;

/// Fetch the server's view of the authenticated user.
pub async fn me(client: &ApiClient) -> Result<User, ClientError> {
    client.get_json("/user/me", &[]).await
}
