use crate::short_id::ShortId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Sentinel click source used when no referrer is known.
pub const DIRECT_SOURCE: &str = "Direct";
/// Sentinel geo value used when no locale is known.
pub const UNKNOWN_GEO: &str = "Unknown";

/// One recorded redirect through a short link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRecord {
    /// When the click happened.
    #[serde(with = "crate::timestamp_ms")]
    pub timestamp: Timestamp,
    /// The referrer, or [`DIRECT_SOURCE`] when there was none.
    pub source: String,
    /// A coarse locale string, or [`UNKNOWN_GEO`] when unavailable.
    pub geo: String,
}

impl ClickRecord {
    /// Builds a click record from the raw redirect context, substituting
    /// the sentinel values for missing referrer or locale.
    pub fn new(timestamp: Timestamp, referrer: Option<String>, locale: Option<String>) -> Self {
        Self {
            timestamp,
            source: referrer.unwrap_or_else(|| DIRECT_SOURCE.to_owned()),
            geo: locale.unwrap_or_else(|| UNKNOWN_GEO.to_owned()),
        }
    }
}

/// One shortened link.
///
/// `short_id` and `original_url` are immutable once created; only the
/// click fields are mutated afterwards, and only by the redirect flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlEntry {
    /// Unique key of this entry.
    pub short_id: ShortId,
    /// The validated absolute URL this entry redirects to.
    pub original_url: String,
    /// When the link stops resolving; `None` means it never expires.
    #[serde(default, with = "crate::timestamp_ms::option")]
    pub expiry_timestamp: Option<Timestamp>,
    /// When the entry was created.
    #[serde(with = "crate::timestamp_ms")]
    pub created_at: Timestamp,
    /// Total recorded clicks. Always equals `click_details.len()`.
    pub clicks: u64,
    /// Append-only click history, oldest first.
    pub click_details: Vec<ClickRecord>,
}

impl UrlEntry {
    /// Creates a fresh entry with no clicks.
    pub fn new(
        short_id: ShortId,
        original_url: impl Into<String>,
        expiry_timestamp: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            short_id,
            original_url: original_url.into(),
            expiry_timestamp,
            created_at,
            clicks: 0,
            click_details: Vec::new(),
        }
    }

    /// Whether this entry has expired as of `now`.
    ///
    /// Expiry is strict: an entry whose expiry equals `now` is still live,
    /// and one whose expiry is a millisecond in the past is not.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expiry_timestamp.is_some_and(|expiry| now > expiry)
    }

    /// Returns this entry with one more click appended.
    ///
    /// Keeps the `clicks == click_details.len()` invariant.
    pub fn with_click(mut self, record: ClickRecord) -> Self {
        self.clicks += 1;
        self.click_details.push(record);
        self
    }
}

/// The whole persisted state of the data namespace.
///
/// Repository operations always read-modify-write the full document;
/// there are no partial updates. Short ids are unique across `urls`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlDocument {
    pub urls: Vec<UrlEntry>,
}

impl UrlDocument {
    /// Finds an entry by short id (linear scan, insertion order).
    pub fn entry(&self, short_id: &ShortId) -> Option<&UrlEntry> {
        self.urls.iter().find(|e| &e.short_id == short_id)
    }
}
