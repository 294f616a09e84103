use crate::kv::KvStore;
use async_trait::async_trait;
use linkstash_core::{Result, StorageError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed implementation of [`KvStore`].
///
/// Each key maps to one `<key>.json` file inside the root directory, and
/// every write replaces the whole file. Durability is whatever a single
/// filesystem write provides; there is no journaling.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys are namespace constants, but refuse anything that could
        // escape the root directory.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StorageError::Operation(format!(
                "invalid storage key: '{key}'"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::write(&path, value).await?;
        Ok(())
    }
}
