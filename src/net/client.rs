//! Authenticated HTTP client.
//!
//! DESIGN
//! ======
//! One shared `reqwest::Client` with the bearer token injected per
//! request from the session store, instead of a mutable default-header
//! map. A 401 triggers exactly one token refresh followed by a retry of
//! the original request; a second 401 (or a missing refresh token)
//! surfaces as `ClientError::Unauthorized`.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::refresh_request;
use crate::config::Config;
use crate::error::{ClientError, api_error};
use crate::state::session::SessionStore;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<SessionStore>) -> Result<Self, ClientError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
        }
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let url = self.api_url(path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.access_token().await {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(json) = body {
            request = request.json(json);
        }
        Ok(request.send().await?)
    }

    async fn refresh_session(&self) -> Result<(), ClientError> {
        let Some(refresh) = self.session.refresh_token().await else {
            return Err(ClientError::Unauthorized);
        };
        tracing::debug!("access token rejected; attempting refresh");
        let tokens = refresh_request(&self.http, &self.base_url, &refresh).await?;
        self.session.rotate_tokens(tokens).await
    }

    /// Issue a request and decode the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let mut response = self.send(method.clone(), path, query, body.as_ref()).await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.refresh_session().await?;
            response = self.send(method, path, query, body.as_ref()).await?;
        }

        let status = response.status();
        if !status.is_success() {
            let value = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(api_error(status.as_u16(), &value));
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::POST, path, &[], Some(serde_json::to_value(body)?)).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::PUT, path, &[], Some(serde_json::to_value(body)?)).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::DELETE, path, &[], None).await
    }
}
