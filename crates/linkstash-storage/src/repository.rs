use crate::document::DocumentStore;
use crate::kv::KvStore;
use linkstash_core::{ClickRecord, Result, ShortId, UrlEntry};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::trace;

/// CRUD operations over the collection of URL entries, keyed by short id.
///
/// Every operation read-modify-writes the full document. Writers hold a
/// shared per-document lock across the whole cycle, so an update cannot
/// be lost to an interleaved writer. Uniqueness of short ids and
/// de-duplication of original URLs are the caller's responsibility;
/// this layer does not re-validate.
#[derive(Debug, Clone)]
pub struct UrlRepository<S> {
    documents: DocumentStore<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KvStore> UrlRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            documents: DocumentStore::new(store),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Appends a new entry and persists the document.
    pub async fn add(&self, entry: UrlEntry) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        trace!(id = %entry.short_id, "adding url entry");
        let mut doc = self.documents.load().await?;
        doc.urls.push(entry);
        self.documents.save(&doc).await
    }

    /// Looks up an entry by short id.
    pub async fn get(&self, short_id: &ShortId) -> Result<Option<UrlEntry>> {
        let doc = self.documents.load().await?;
        Ok(doc.urls.into_iter().find(|e| &e.short_id == short_id))
    }

    /// Returns all entries in insertion order.
    pub async fn all(&self) -> Result<Vec<UrlEntry>> {
        Ok(self.documents.load().await?.urls)
    }

    /// Replaces the entry for `short_id` with `transform` applied to its
    /// current value, then persists.
    ///
    /// Returns `false` (without touching the document) when no entry
    /// matches.
    pub async fn update<F>(&self, short_id: &ShortId, transform: F) -> Result<bool>
    where
        F: FnOnce(UrlEntry) -> UrlEntry + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.documents.load().await?;

        let Some(index) = doc.urls.iter().position(|e| &e.short_id == short_id) else {
            trace!(id = %short_id, "update target not found");
            return Ok(false);
        };

        let current = doc.urls[index].clone();
        doc.urls[index] = transform(current);
        self.documents.save(&doc).await?;
        Ok(true)
    }

    /// Appends a click record to an entry and bumps its counter.
    ///
    /// This is the only mutation an entry sees after creation; it keeps
    /// `clicks == click_details.len()`.
    pub async fn record_click(&self, short_id: &ShortId, record: ClickRecord) -> Result<bool> {
        self.update(short_id, |entry| entry.with_click(record)).await
    }
}
