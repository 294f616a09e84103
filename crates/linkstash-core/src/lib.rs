//! Core types and traits for the linkstash URL shortener.
//!
//! This crate provides the domain model (URL entries, click records, the
//! persisted document), the event model, the clock abstraction, and the
//! shared error types used by the storage, shortener, and redirector crates.

pub mod clock;
pub mod entry;
pub mod error;
pub mod event;
pub mod short_id;
pub mod timestamp_ms;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{ClickRecord, UrlDocument, UrlEntry};
pub use error::{CoreError, Result, StorageError};
pub use event::{Event, EventRecord, EventSink, FailureReason, NullSink};
pub use short_id::ShortId;
