//! Local user settings blob (notifications, biometric unlock, analytics).
//! Never sent to the server.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::error::ClientError;
use crate::net::types::UserSettings;
use crate::storage::{KEY_USER_SETTINGS, Storage};

/// Load settings, falling back to defaults when the blob is absent.
pub fn load(storage: &Storage) -> Result<UserSettings, ClientError> {
    Ok(storage.get_json(KEY_USER_SETTINGS)?.unwrap_or_default())
}

pub fn save(storage: &Storage, settings: &UserSettings) -> Result<(), ClientError> {
    storage.set_json(KEY_USER_SETTINGS, settings)
}
