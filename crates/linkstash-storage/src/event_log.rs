use crate::kv::{KvStore, LOGS_KEY};
use async_trait::async_trait;
use linkstash_core::{Clock, Event, EventRecord, EventSink, Result, SystemClock};
use tracing::warn;

/// The persisted event log (the logs namespace).
///
/// Events append to a single JSON array under [`LOGS_KEY`], each record
/// stamped with an ISO-8601 timestamp. The sink side is fire-and-forget:
/// append failures are logged and swallowed, never surfaced to the flows
/// that emit events.
#[derive(Debug, Clone)]
pub struct EventLog<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: KvStore> EventLog<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KvStore, C: Clock> EventLog<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns all recorded events, oldest first.
    ///
    /// A corrupt stored log reads as the empty list, matching the
    /// recovery policy of the data namespace.
    pub async fn events(&self) -> Result<Vec<EventRecord>> {
        let Some(raw) = self.store.get(LOGS_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(error = %e, "stored event log is not valid JSON, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn append(&self, event: Event) -> Result<()> {
        let mut records = self.events().await?;
        records.push(EventRecord {
            timestamp: self.clock.now(),
            event,
        });
        let raw = serde_json::to_string(&records)?;
        self.store.set(LOGS_KEY, raw).await
    }
}

#[async_trait]
impl<S: KvStore, C: Clock> EventSink for EventLog<S, C> {
    async fn log_event(&self, event: Event) {
        if let Err(e) = self.append(event).await {
            warn!(error = %e, "dropping event, log append failed");
        }
    }
}
