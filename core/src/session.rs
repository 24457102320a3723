//! Durable local session state: a login flag and a display name.
//!
//! # Design
//! The session lives in a single JSON document at a caller-chosen path, so
//! both fields change together: `set_logged_in` writes the whole document to
//! a temp file and renames it over the old one, which makes the update
//! all-or-nothing on any reasonable filesystem. Reads have no failure path —
//! a missing or unreadable file simply means "not logged in". The store is
//! an explicit value handed to whoever needs it (startup check, login,
//! logout), never ambient global state.
//!
//! Single-writer discipline is the caller's job; this type adds no locking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Display name reported before any login has been persisted.
pub const DEFAULT_USER_NAME: &str = "User";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    logged_in: bool,
    user_name: Option<String>,
}

/// File-backed session store surviving process restarts.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Bind the store to `path`. Nothing is read or created until first use.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> SessionData {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist `logged_in = true` together with `user_name`. Both fields land
    /// in one rename, so a crash mid-write leaves the previous state intact.
    pub fn set_logged_in(&self, user_name: &str) -> io::Result<()> {
        let data = SessionData {
            logged_in: true,
            user_name: Some(user_name.to_string()),
        };
        let raw = serde_json::to_string(&data).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)
    }

    /// False until a successful login has been persisted, and false again
    /// after `clear`.
    pub fn is_logged_in(&self) -> bool {
        self.load().logged_in
    }

    /// The persisted display name, or `"User"` when none is stored.
    pub fn user_name(&self) -> String {
        self.load()
            .user_name
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string())
    }

    /// Remove all session state (logout). A store that was never written is
    /// fine to clear.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::open(dir.path().join("session.json"))
    }

    #[test]
    fn fresh_store_reports_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.is_logged_in());
        assert_eq!(store.user_name(), "User");
    }

    #[test]
    fn set_logged_in_persists_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_logged_in("Amina").unwrap();
        assert!(store.is_logged_in());
        assert_eq!(store.user_name(), "Amina");
    }

    #[test]
    fn state_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        SessionStore::open(&path).set_logged_in("Amina").unwrap();

        let reopened = SessionStore::open(&path);
        assert!(reopened.is_logged_in());
        assert_eq!(reopened.user_name(), "Amina");
    }

    #[test]
    fn clear_resets_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_logged_in("Amina").unwrap();
        store.clear().unwrap();
        assert!(!store.is_logged_in());
        assert_eq!(store.user_name(), "User");
    }

    #[test]
    fn clear_on_fresh_store_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.clear().is_ok());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{{ not json").unwrap();

        let store = SessionStore::open(&path);
        assert!(!store.is_logged_in());
        assert_eq!(store.user_name(), "User");
    }

    #[test]
    fn relogin_overwrites_previous_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_logged_in("Amina").unwrap();
        store.set_logged_in("John").unwrap();
        assert_eq!(store.user_name(), "John");
    }
}
