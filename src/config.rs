//! Client configuration: where the API lives and where local state goes.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Every request carries this timeout; the API has no long-poll endpoints.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct Config {
    /// API origin without the `/api` suffix, no trailing slash.
    pub base_url: String,
    /// Directory holding the persisted session and settings files.
    pub data_dir: PathBuf,
    pub timeout: Duration,
}

impl Config {
    #[must_use]
    pub fn new(base_url: &str, data_dir: Option<PathBuf>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aico")
}
