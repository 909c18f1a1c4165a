//! Persistent session token storage.
//!
//! Holds the single bearer token that proves the administrator is logged in.
//! The token is cached in memory and mirrored to a file in the platform data
//! directory so the session survives restarts. No local expiry check is
//! performed; an expired token is only discovered via a 401 response.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;

/// File-backed store for the session bearer token.
pub struct SessionStore {
    path: PathBuf,
    token: Mutex<Option<String>>,
}

impl SessionStore {
    /// Default token file path in the platform data directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "campus-admin")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("session.token")
    }

    /// Open the store, loading any previously persisted token.
    pub fn open(path: PathBuf) -> Self {
        let token = std::fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            path,
            token: Mutex::new(token),
        }
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<String> {
        self.token.lock().expect("session lock poisoned").clone()
    }

    /// Whether a token is currently stored.
    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    /// Store a new token and persist it.
    pub fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        *self.token.lock().expect("session lock poisoned") = Some(token.to_string());
        Ok(())
    }

    /// Drop the token and remove the persisted copy.
    pub fn clear(&self) -> Result<()> {
        *self.token.lock().expect("session lock poisoned") = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SessionStore {
        let path = std::env::temp_dir().join(format!("campus-admin-test-{name}-{}", std::process::id()));
        let _ = std::fs::remove_file(&path);
        SessionStore::open(path)
    }

    #[test]
    fn test_empty_store_has_no_token() {
        let store = temp_store("empty");
        assert_eq!(store.get(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_set_then_get() {
        let store = temp_store("set");
        store.set("abc123").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc123"));
        assert!(store.is_logged_in());
        store.clear().unwrap();
    }

    #[test]
    fn test_token_survives_reopen() {
        let store = temp_store("reopen");
        store.set("persisted-token").unwrap();

        let reopened = SessionStore::open(store.path.clone());
        assert_eq!(reopened.get().as_deref(), Some("persisted-token"));
        store.clear().unwrap();
    }

    #[test]
    fn test_clear_removes_token_and_file() {
        let store = temp_store("clear");
        store.set("gone-soon").unwrap();
        store.clear().unwrap();

        assert_eq!(store.get(), None);
        assert!(!store.path.exists());

        // Clearing again is a no-op, not an error
        store.clear().unwrap();
    }
}
