//! Persisted key-value storage.
//!
//! DESIGN
//! ======
//! Device-storage analogue: one JSON value per fixed key, each key a
//! file `<data_dir>/<key>.json`. No schema versioning; a missing key
//! reads as `None`, a corrupt value surfaces as a storage error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

pub const KEY_AUTH_TOKEN: &str = "auth_token";
pub const KEY_REFRESH_TOKEN: &str = "refresh_token";
pub const KEY_USER: &str = "user";
pub const KEY_USER_SETTINGS: &str = "user_settings";

#[derive(Clone, Debug)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open (and create if needed) the storage directory.
    pub fn open(dir: &Path) -> Result<Self, ClientError> {
        fs::create_dir_all(dir).map_err(|source| ClientError::StorageWrite {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir: dir.to_owned() })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>, ClientError> {
        let Some(raw) = self.read_raw(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str::<String>(&raw).map_err(|err| {
            ClientError::StorageRead { key: key.to_owned(), source: io::Error::other(err) }
        })?;
        Ok(Some(value))
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.set_json(key, &value)
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ClientError> {
        let Some(raw) = self.read_raw(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str::<T>(&raw).map_err(|err| ClientError::StorageRead {
            key: key.to_owned(),
            source: io::Error::other(err),
        })?;
        Ok(Some(value))
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ClientError> {
        let raw = serde_json::to_string(value).map_err(|err| ClientError::StorageWrite {
            key: key.to_owned(),
            source: io::Error::other(err),
        })?;
        self.write_raw(key, &raw)
    }

    /// Remove a key; removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), ClientError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ClientError::StorageWrite { key: key.to_owned(), source }),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>, ClientError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ClientError::StorageRead { key: key.to_owned(), source }),
        }
    }

    fn write_raw(&self, key: &str, raw: &str) -> Result<(), ClientError> {
        fs::write(self.path_for(key), raw).map_err(|source| ClientError::StorageWrite {
            key: key.to_owned(),
            source,
        })
    }
}
