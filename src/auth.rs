//! Login, signup, logout, and token refresh.
//!
//! Auth endpoints bypass `ApiClient` on purpose: they must not carry a
//! stale bearer token, and a 401 from `/auth/login` means bad
//! credentials, not an expired session to refresh.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::config::Config;
use crate::error::{ClientError, api_error};
use crate::net::types::{AuthResponse, User};
use crate::state::session::{SessionStore, SessionTokens};

pub struct Authenticator {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl Authenticator {
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

    /// Authenticate with credentials and install the returned session.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation("email and password are required".to_owned()));
        }
        let body = json!({ "email": email, "password": password });
        self.authenticate("/auth/login", &body).await
    }

    /// Create an account; same session side effects as `login`.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User, ClientError> {
        if email.trim().is_empty() || password.is_empty() || full_name.trim().is_empty() {
            return Err(ClientError::Validation(
                "email, password, and full name are required".to_owned(),
            ));
        }
        let body = json!({ "email": email, "password": password, "full_name": full_name });
        self.authenticate("/auth/signup", &body).await
    }

    async fn authenticate(&self, path: &str, body: &Value) -> Result<User, ClientError> {
        let url = format!("{}/api{}", self.base_url, path);
        tracing::debug!(%url, "authenticating");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::InvalidCredentials);
        }
        if !status.is_success() {
            let value = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(api_error(status.as_u16(), &value));
        }

        // Validate before any storage write: a 2xx without a token or
        // user must leave the persisted session untouched.
        let auth = response.json::<AuthResponse>().await?;
        let Some(access) = auth.access_token else {
            return Err(ClientError::MalformedAuthResponse("access_token"));
        };
        let Some(user) = auth.user else {
            return Err(ClientError::MalformedAuthResponse("user"));
        };

        let tokens = SessionTokens { access, refresh: auth.refresh_token };
        self.session.install(tokens, user.clone()).await?;
        tracing::debug!(user = %user.email, "session established");
        Ok(user)
    }

    /// Terminate the session. Client-local only; the API has no
    /// server-side invalidation call.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.session.clear().await?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Exchange the stored refresh token for fresh tokens.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let Some(refresh) = self.session.refresh_token().await else {
            return Err(ClientError::Unauthorized);
        };
        let tokens = refresh_request(&self.http, &self.base_url, &refresh).await?;
        self.session.rotate_tokens(tokens).await
    }
}

/// Raw token-refresh call, shared with the HTTP client's 401 retry.
/// Any refresh failure collapses to `Unauthorized`; the caller's session
/// is simply expired at that point.
pub(crate) async fn refresh_request(
    http: &reqwest::Client,
    base_url: &str,
    refresh_token: &str,
) -> Result<SessionTokens, ClientError> {
    let url = format!("{base_url}/api/auth/refresh");
    let response = http
        .post(&url)
        .json(&json!({ "refresh_token": refresh_token }))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ClientError::Unauthorized);
    }

    let auth = response.json::<AuthResponse>().await?;
    let Some(access) = auth.access_token else {
        return Err(ClientError::MalformedAuthResponse("access_token"));
    };
    // Keep the old refresh token when the server does not rotate it.
    let refresh = auth.refresh_token.or_else(|| Some(refresh_token.to_owned()));
    Ok(SessionTokens { access, refresh })
}
