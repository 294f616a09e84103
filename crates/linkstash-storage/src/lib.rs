//! Persistence for the linkstash URL shortener.
//!
//! The durable surface is a single-origin key-value store of string blobs
//! ([`KvStore`]), with two fixed namespaces on top of it: the URL document
//! ([`DocumentStore`] / [`UrlRepository`]) and the event log ([`EventLog`]).

pub mod document;
pub mod event_log;
pub mod file;
pub mod kv;
pub mod memory;
pub mod repository;

pub use document::DocumentStore;
pub use event_log::EventLog;
pub use file::FileStore;
pub use kv::{KvStore, DATA_KEY, LOGS_KEY};
pub use memory::MemoryStore;
pub use repository::UrlRepository;
