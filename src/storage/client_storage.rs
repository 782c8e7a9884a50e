//! Persisted client-side key/value flags
//!
//! Plays the role browser local storage plays for the web client: a flat
//! string map that survives restarts. Every write is flushed to disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use crate::error::PouparResult;

/// Set once the user accepts cookies
pub const COOKIES_ACCEPTED: &str = "cookiesAccepted";
/// Set once the user declines cookies
pub const COOKIES_DECLINED: &str = "cookiesDeclined";
/// Selected colour theme
pub const THEME: &str = "theme";

/// String map persisted as JSON
#[derive(Debug)]
pub struct ClientStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl ClientStorage {
    /// Open the store, loading existing entries if the file is present
    pub fn open(path: PathBuf) -> PouparResult<Self> {
        let entries: BTreeMap<String, String> = read_json(&path)?;
        debug!(path = %path.display(), entries = entries.len(), "client storage loaded");
        Ok(Self { path, entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a value and persist immediately
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> PouparResult<()> {
        self.entries.insert(key.to_string(), value.into());
        self.save()
    }

    /// Remove a value and persist; returns whether it existed
    pub fn remove(&mut self, key: &str) -> PouparResult<bool> {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn save(&self) -> PouparResult<()> {
        write_json_atomic(&self.path, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client_storage.json");

        let mut storage = ClientStorage::open(path.clone()).unwrap();
        assert!(!storage.contains(COOKIES_ACCEPTED));
        storage.set(COOKIES_ACCEPTED, "true").unwrap();
        storage.set(THEME, "dark").unwrap();

        let reopened = ClientStorage::open(path).unwrap();
        assert_eq!(reopened.get(COOKIES_ACCEPTED), Some("true"));
        assert_eq!(reopened.get(THEME), Some("dark"));
        assert_eq!(reopened.keys().count(), 2);
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client_storage.json");

        let mut storage = ClientStorage::open(path.clone()).unwrap();
        storage.set(COOKIES_DECLINED, "true").unwrap();
        assert!(storage.remove(COOKIES_DECLINED).unwrap());
        assert!(!storage.remove(COOKIES_DECLINED).unwrap());

        let reopened = ClientStorage::open(path).unwrap();
        assert!(!reopened.contains(COOKIES_DECLINED));
    }
}
