//! URL submission flow for the linkstash shortener.
//!
//! Validates and de-duplicates submitted URLs, allocates unique short
//! ids, persists the resulting entries, and emits the matching domain
//! events. Core types are re-exported from `linkstash_core`.

pub mod error;
pub mod service;

pub use error::ShortenerError;
pub use service::{ExpiryPolicy, ShortenOutcome, ShortenRequest, ShortenerService};
