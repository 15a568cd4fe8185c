//! File-backed session store
//!
//! The production backend: one `<key>.json` file per key under a data
//! directory, resolved by default from the platform data dir. Writes go
//! straight to disk so a process restart observes the last completed
//! mutation, matching the browser-storage semantics this store stands in
//! for.

use crate::store::SessionStore;
use cakeshop_core::{Result, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory-of-JSON-files [`SessionStore`]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(StorageError::Io)?;
        Ok(Self { dir })
    }

    /// Opens the store in the platform data directory
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            StorageError::Directory("platform data directory is not available".to_string())
        })?;
        Self::new(base.join("cakeshop"))
    }

    /// The directory this store reads and writes
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, path = %path.display(), %err, "failed to read store file");
                None
            }
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|err| StorageError::WriteFailed {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != ErrorKind::NotFound {
                warn!(key, path = %path.display(), %err, "failed to remove store file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreExt;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        name: String,
        count: u32,
    }

    #[test]
    fn test_file_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("store")).unwrap();

        let blob = Blob {
            name: "cart".to_string(),
            count: 3,
        };
        store.set_json("shopping-cart", &blob).unwrap();
        assert_eq!(store.get_json::<Blob>("shopping-cart").unwrap(), blob);

        // Survives reopening the same directory.
        let reopened = FileStore::new(tmp.path().join("store")).unwrap();
        assert_eq!(reopened.get_json::<Blob>("shopping-cart").unwrap(), blob);
    }

    #[test]
    fn test_missing_and_removed_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();

        assert!(store.get_raw("absent").is_none());
        store.set_raw("k", "1").unwrap();
        store.remove("k");
        assert!(store.get_raw("k").is_none());
        store.remove("k");
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();
        std::fs::write(tmp.path().join("cakeBuilderState.json"), "{{{{").unwrap();
        let value: Option<Blob> = store.get_json("cakeBuilderState");
        assert!(value.is_none());
    }
}
