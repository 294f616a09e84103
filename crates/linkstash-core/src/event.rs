use crate::short_id::ShortId;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Why a redirect did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    #[serde(rename = "Not found")]
    NotFound,
    Expired,
}

impl Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::NotFound => f.write_str("Not found"),
            FailureReason::Expired => f.write_str("Expired"),
        }
    }
}

/// A domain event emitted by the core flows.
///
/// Serialized with a `type` discriminator into the logs namespace; the
/// per-variant fields keep the original wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "URL_SHORTENED", rename_all = "camelCase")]
    UrlShortened {
        short_id: ShortId,
        original_url: String,
        #[serde(default, with = "crate::timestamp_ms::option")]
        expiry_timestamp: Option<Timestamp>,
    },
    #[serde(rename = "REDIRECT", rename_all = "camelCase")]
    Redirect {
        short_id: ShortId,
        original_url: String,
    },
    #[serde(rename = "REDIRECT_FAILED", rename_all = "camelCase")]
    RedirectFailed {
        short_id: ShortId,
        reason: FailureReason,
    },
    #[serde(rename = "VIEW_STATS_PAGE")]
    ViewStatsPage,
}

/// One persisted event, stamped at append time.
///
/// The timestamp serializes as an ISO-8601 string, unlike the data
/// namespace which stores epoch-milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub timestamp: Timestamp,
    #[serde(flatten)]
    pub event: Event,
}

/// A fire-and-forget sink for domain events.
///
/// Callers never observe sink failures; implementations are expected to
/// swallow their own errors.
#[async_trait]
pub trait EventSink: Send + Sync + 'static {
    async fn log_event(&self, event: Event);
}

/// A sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl EventSink for NullSink {
    async fn log_event(&self, _event: Event) {}
}
