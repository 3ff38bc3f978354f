//! Authentication token storage.
//!
//! The token is an opaque bearer credential. It is written after a
//! successful login, read before every outbound request and removed on
//! logout. Stores perform no expiry checks: a stale token is only noticed
//! when the server rejects a request.

use std::collections::BTreeMap;
use std::fmt;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use unilink_core::{Error, Result};

use crate::TRACING_TARGET_TOKEN;

/// Key under which the token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Shared, type-erased token store.
pub type SharedTokenStore = Arc<dyn TokenStore>;

/// Key-value accessor for the authentication token.
pub trait TokenStore: fmt::Debug + Send + Sync {
    /// Returns the stored token, if any.
    fn get(&self) -> Result<Option<String>>;

    /// Replaces the stored token.
    fn set(&self, token: &str) -> Result<()>;

    /// Removes the stored token.
    fn clear(&self) -> Result<()>;
}

/// Process-wide in-memory token store.
///
/// Clones share the same underlying value.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTokenStore").finish_non_exhaustive()
    }
}

fn poisoned() -> Error {
    Error::storage().with_message("token store lock poisoned")
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>> {
        let guard = self.inner.read().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        *guard = None;
        Ok(())
    }
}

/// Persistent token store backed by a small JSON key-value file.
///
/// The file holds a flat string map; the token lives under [`TOKEN_KEY`].
/// A missing file means no token. A file that cannot be parsed is reported
/// as a storage error.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == IoErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(Error::from(err)
                    .with_context(format!("reading {}", self.path.display())));
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|err| {
            Error::storage()
                .with_message("token file is corrupted")
                .with_context(self.path.display().to_string())
                .with_source(err)
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let staging = self.path.with_extension("tmp");
        std::fs::write(&staging, contents)?;
        std::fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(TOKEN_KEY))
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_owned(), token.to_owned());
        self.write_entries(&entries)?;

        tracing::debug!(
            target: TRACING_TARGET_TOKEN,
            path = %self.path.display(),
            "Token persisted"
        );
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }

        if entries.is_empty() {
            match std::fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(err) if err.kind() == IoErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        } else {
            self.write_entries(&entries)?;
        }

        tracing::debug!(
            target: TRACING_TARGET_TOKEN,
            path = %self.path.display(),
            "Token cleared"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use unilink_core::ErrorKind;

    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get().unwrap(), None);

        store.set("abc").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_value() {
        let store = MemoryTokenStore::new();
        let clone = store.clone();
        store.set("shared").unwrap();
        assert_eq!(clone.get().unwrap().as_deref(), Some("shared"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));
        assert_eq!(store.get().unwrap(), None);
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token.json");

        FileTokenStore::new(&path).set("persisted").unwrap();
        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get().unwrap().as_deref(), Some("persisted"));

        reopened.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = FileTokenStore::new(&path);
        store.set("abc").unwrap();
        store.clear().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("theme"));
        assert!(!contents.contains("abc"));
    }

    #[test]
    fn test_file_store_corrupted_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileTokenStore::new(&path).get().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
