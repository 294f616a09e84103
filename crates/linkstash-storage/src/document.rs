use crate::kv::{KvStore, DATA_KEY};
use linkstash_core::{Result, UrlDocument};
use tracing::warn;

/// Typed access to the data namespace.
///
/// Wraps a [`KvStore`] and owns the whole-document load/save cycle. A
/// missing or unparseable blob loads as the empty document; corrupt
/// stored bytes are never surfaced to callers.
#[derive(Debug, Clone)]
pub struct DocumentStore<S> {
    store: S,
}

impl<S: KvStore> DocumentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the current document.
    ///
    /// Returns the empty document when nothing is stored yet, and also
    /// when the stored bytes fail to parse (treated as "no data yet").
    /// I/O failures from the underlying store do propagate.
    pub async fn load(&self) -> Result<UrlDocument> {
        let Some(raw) = self.store.get(DATA_KEY).await? else {
            return Ok(UrlDocument::default());
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(error = %e, "stored document is not valid JSON, treating as empty");
                Ok(UrlDocument::default())
            }
        }
    }

    /// Serializes and writes the full document, replacing the prior value.
    pub async fn save(&self, doc: &UrlDocument) -> Result<()> {
        let raw = serde_json::to_string(doc)?;
        self.store.set(DATA_KEY, raw).await
    }
}
