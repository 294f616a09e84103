use async_trait::async_trait;
use linkstash_core::Result;

/// Namespace key holding the URL document.
pub const DATA_KEY: &str = "linkstash-data";
/// Namespace key holding the event log.
pub const LOGS_KEY: &str = "linkstash-logs";

/// A single-origin durable string store.
///
/// Values are whole blobs replaced on every write; there is no partial
/// update and no transaction beyond what a single `set` provides.
/// Implementations can be in-memory for tests or file-backed for real
/// durability, with no caller aware of the difference.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Reads the blob stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any prior value.
    async fn set(&self, key: &str, value: String) -> Result<()>;
}
