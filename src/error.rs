//! Error taxonomy for the client.
//!
//! Three families: validation errors caught before any network call,
//! API errors carrying the server's `detail` message when it sends one,
//! and local storage errors. Nothing here is fatal to the library; the
//! CLI renders the message and exits nonzero.

use serde_json::Value;

/// Fallback message when the server gives no usable `detail` field.
pub(crate) const FALLBACK_DETAIL: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("not authenticated; run `aico auth login` first")]
    NotLoggedIn,
    #[error("session expired; run `aico auth login` again")]
    Unauthorized,
    #[error("auth response missing `{0}`")]
    MalformedAuthResponse(&'static str),
    #[error("server returned {status}: {detail}")]
    Api { status: u16, detail: String },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage read failed for `{key}`: {source}")]
    StorageRead {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage write failed for `{key}`: {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Map a non-success API response body to an error, pulling the server's
/// `detail` string out when present.
pub(crate) fn api_error(status: u16, body: &Value) -> ClientError {
    if status == 401 {
        return ClientError::Unauthorized;
    }
    let detail = body
        .get("detail")
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_DETAIL)
        .to_owned();
    ClientError::Api { status, detail }
}
