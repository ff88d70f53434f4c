//! Key-value storage backends for the session record
//!
//! The session service only needs the three operations browser
//! `localStorage` offers. Backends:
//!
//! - [`MemoryStore`]: process-local map, shareable between service instances
//! - [`FileStore`]: one file per key under a data directory

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::error::{SessionError, SessionResult};

/// Minimal string key-value storage
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> SessionResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Remove a key. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> SessionResult<()>;
}

/// In-memory store.
///
/// Clones share the same map, so a second service built from a clone sees
/// what the first one persisted (a simulated page reload).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail as if the quota were exceeded
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_writable(&self) -> SessionResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SessionError::Write("storage quota exceeded".to_string()));
        }
        Ok(())
    }

    fn lock(&self) -> SessionResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| SessionError::StorageUnavailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        self.check_writable()?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        self.check_writable()?;
        self.lock()?.remove(key);
        Ok(())
    }
}

/// File-backed store: each key is `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.data_dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Io(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| SessionError::Write(format!("{:?}: {}", self.data_dir, e)))?;

        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| SessionError::Write(format!("{:?}: {}", path, e)))?;

        tracing::debug!(path = ?path, "Stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Write(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));

        store.remove_item("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clones_share_items() {
        let store = MemoryStore::new();
        let reloaded = store.clone();
        store.set_item("k", "v").unwrap();
        assert_eq!(reloaded.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        assert!(matches!(store.set_item("k", "v"), Err(SessionError::Write(_))));
        assert!(store.is_empty());

        store.fail_writes(false);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get_item("mediclean_user").unwrap(), None);

        store.set_item("mediclean_user", "{}").unwrap();
        assert!(store.path_for("mediclean_user").exists());
        assert_eq!(store.get_item("mediclean_user").unwrap().as_deref(), Some("{}"));

        store.remove_item("mediclean_user").unwrap();
        assert_eq!(store.get_item("mediclean_user").unwrap(), None);

        // Removing twice is fine
        store.remove_item("mediclean_user").unwrap();
    }

    #[test]
    fn test_file_store_sanitizes_key() {
        let store = FileStore::new("/tmp/data");
        assert_eq!(
            store.path_for("../etc/passwd"),
            PathBuf::from("/tmp/data/___etc_passwd.json")
        );
    }
}
