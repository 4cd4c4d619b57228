//! Session store: current user, tokens, and the restore lifecycle.
//!
//! DESIGN
//! ======
//! An explicit state container with init (restore) and teardown (clear)
//! points, shared via `Arc` between the authenticator and the HTTP
//! client rather than living as an ambient global. Persistence goes
//! through `Storage` under fixed keys; memory is only mutated after the
//! corresponding storage write succeeds.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::net::types::User;
use crate::storage::{KEY_AUTH_TOKEN, KEY_REFRESH_TOKEN, KEY_USER, Storage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: Option<String>,
}

#[derive(Debug)]
struct SessionState {
    user: Option<User>,
    tokens: Option<SessionTokens>,
    loading: bool,
}

#[derive(Debug)]
pub struct SessionStore {
    storage: Storage,
    state: RwLock<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState { user: None, tokens: None, loading: true }),
        }
    }

    /// Restore a persisted session from storage.
    ///
    /// A session is restored only when both the access token and the
    /// user record are present; otherwise state stays empty. The
    /// loading flag is cleared in every case, including storage errors,
    /// since it gates whether callers may inspect the session at all.
    pub async fn restore(&self) -> Result<bool, ClientError> {
        let restored = self.try_restore().await;
        self.state.write().await.loading = false;
        restored
    }

    async fn try_restore(&self) -> Result<bool, ClientError> {
        let access = self.storage.get_string(KEY_AUTH_TOKEN)?;
        let user = self.storage.get_json::<User>(KEY_USER)?;
        let (Some(access), Some(user)) = (access, user) else {
            return Ok(false);
        };
        let refresh = self.storage.get_string(KEY_REFRESH_TOKEN)?;

        let mut state = self.state.write().await;
        state.tokens = Some(SessionTokens { access, refresh });
        state.user = Some(user);
        tracing::debug!("session restored from storage");
        Ok(true)
    }

    /// Persist and install a freshly authenticated session.
    pub async fn install(&self, tokens: SessionTokens, user: User) -> Result<(), ClientError> {
        self.storage.set_string(KEY_AUTH_TOKEN, &tokens.access)?;
        match tokens.refresh.as_deref() {
            Some(refresh) => self.storage.set_string(KEY_REFRESH_TOKEN, refresh)?,
            None => self.storage.remove(KEY_REFRESH_TOKEN)?,
        }
        self.storage.set_json(KEY_USER, &user)?;

        let mut state = self.state.write().await;
        state.tokens = Some(tokens);
        state.user = Some(user);
        state.loading = false;
        Ok(())
    }

    /// Swap tokens after a refresh, leaving the user record alone.
    pub async fn rotate_tokens(&self, tokens: SessionTokens) -> Result<(), ClientError> {
        self.storage.set_string(KEY_AUTH_TOKEN, &tokens.access)?;
        if let Some(refresh) = tokens.refresh.as_deref() {
            self.storage.set_string(KEY_REFRESH_TOKEN, refresh)?;
        }
        self.state.write().await.tokens = Some(tokens);
        tracing::debug!("session tokens rotated");
        Ok(())
    }

    /// Terminate the session: remove persisted keys, reset memory.
    /// Client-local only; no server-side invalidation exists.
    pub async fn clear(&self) -> Result<(), ClientError> {
        self.storage.remove(KEY_AUTH_TOKEN)?;
        self.storage.remove(KEY_REFRESH_TOKEN)?;
        self.storage.remove(KEY_USER)?;

        let mut state = self.state.write().await;
        state.tokens = None;
        state.user = None;
        Ok(())
    }

    pub async fn access_token(&self) -> Option<String> {
        self.state.read().await.tokens.as_ref().map(|tokens| tokens.access.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.state.read().await.tokens.as_ref().and_then(|tokens| tokens.refresh.clone())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Whether a user is present; drives the login/authenticated split.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
