use crate::kv::KvStore;
use async_trait::async_trait;
use linkstash_core::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory implementation of [`KvStore`].
///
/// Clones share the same underlying map, so the data and log namespaces
/// of one logical store can be handed to different components.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key with raw bytes, bypassing serialization.
    ///
    /// Useful for tests that need malformed stored data.
    pub async fn seed(&self, key: &str, value: impl Into<String>) {
        self.entries.lock().await.insert(key.to_owned(), value.into());
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.lock().await.insert(key.to_owned(), value);
        Ok(())
    }
}
