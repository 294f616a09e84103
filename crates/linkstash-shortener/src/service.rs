use crate::error::{Result, ShortenerError};
use jiff::{SignedDuration, Timestamp};
use linkstash_core::{Clock, Event, EventSink, ShortId, SystemClock, UrlEntry};
use linkstash_generator::IdSource;
use linkstash_storage::{KvStore, UrlRepository};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Expiration policy for a shortened URL.
#[derive(Debug, Clone)]
pub enum ExpiryPolicy {
    /// The shortened URL never expires.
    Never,
    /// The shortened URL expires after a certain duration from now.
    AfterDuration(SignedDuration),
    /// The shortened URL expires at a specific timestamp.
    AtTimestamp(Timestamp),
}

/// One URL submission.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenRequest {
    /// The original URL to be shortened. Leading and trailing whitespace
    /// is trimmed before validation.
    #[builder(setter(into))]
    pub original_url: String,
    /// The expiration policy for the shortened URL.
    #[builder(default = ExpiryPolicy::Never)]
    pub expiry: ExpiryPolicy,
}

/// The per-request result of a shorten call.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortenOutcome {
    /// A new entry was created and persisted.
    Created(UrlEntry),
    /// The exact same URL already has an entry; the request was skipped.
    Duplicate { original_url: String },
}

/// The URL submission service.
///
/// Wraps the repository, an id source, and an event sink to handle
/// validation, exact-match de-duplication, unique-id allocation, and
/// expiry policy conversion. Two URLs are duplicates only when their
/// trimmed strings are byte-equal; no normalization is applied.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G, E, C = SystemClock> {
    repository: UrlRepository<S>,
    ids: Arc<G>,
    events: Arc<E>,
    clock: C,
}

impl<S: KvStore, G: IdSource, E: EventSink> ShortenerService<S, G, E> {
    pub fn new(repository: UrlRepository<S>, ids: G, events: E) -> Self {
        Self {
            repository,
            ids: Arc::new(ids),
            events: Arc::new(events),
            clock: SystemClock,
        }
    }
}

impl<S: KvStore, G: IdSource, E: EventSink, C: Clock> ShortenerService<S, G, E, C> {
    /// Replaces the clock, e.g. with a manual clock in tests.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> ShortenerService<S, G, E, C2> {
        ShortenerService {
            repository: self.repository,
            ids: self.ids,
            events: self.events,
            clock,
        }
    }

    /// Shortens a single URL.
    pub async fn shorten(&self, request: ShortenRequest) -> Result<ShortenOutcome> {
        let mut outcomes = self.shorten_many(vec![request]).await?;
        // shorten_many returns exactly one outcome per request
        Ok(outcomes.remove(0))
    }

    /// Shortens a batch of URLs in order.
    ///
    /// The whole batch is validated up front; any invalid URL rejects the
    /// submission without creating entries. Duplicates (against stored
    /// entries or earlier requests in the same batch) are skipped, not
    /// errors.
    pub async fn shorten_many(
        &self,
        requests: Vec<ShortenRequest>,
    ) -> Result<Vec<ShortenOutcome>> {
        let mut validated = Vec::with_capacity(requests.len());
        for request in requests {
            let original_url = request.original_url.trim().to_owned();
            validate_url(&original_url)?;
            validated.push((original_url, request.expiry));
        }

        let entries = self.repository.all().await?;
        let mut known_urls: HashSet<String> =
            entries.iter().map(|e| e.original_url.clone()).collect();
        let mut taken: HashSet<ShortId> =
            entries.iter().map(|e| e.short_id.clone()).collect();

        let mut outcomes = Vec::with_capacity(validated.len());
        for (original_url, expiry) in validated {
            if known_urls.contains(&original_url) {
                debug!(url = %original_url, "duplicate url skipped");
                outcomes.push(ShortenOutcome::Duplicate { original_url });
                continue;
            }

            let short_id = linkstash_generator::allocate(self.ids.as_ref(), &taken)?;
            trace!(id = %short_id, url = %original_url, "allocated short id");

            let now = self.clock.now();
            let expiry_timestamp = expiry_timestamp(&expiry, now);
            let entry = UrlEntry::new(
                short_id.clone(),
                original_url.clone(),
                expiry_timestamp,
                now,
            );

            self.repository.add(entry.clone()).await?;
            self.events
                .log_event(Event::UrlShortened {
                    short_id: short_id.clone(),
                    original_url: original_url.clone(),
                    expiry_timestamp,
                })
                .await;

            known_urls.insert(original_url);
            taken.insert(short_id);
            outcomes.push(ShortenOutcome::Created(entry));
        }

        Ok(outcomes)
    }

    /// Returns all entries in insertion order.
    pub async fn entries(&self) -> Result<Vec<UrlEntry>> {
        Ok(self.repository.all().await?)
    }

    /// Returns all entries and records that the statistics were viewed.
    pub async fn stats(&self) -> Result<Vec<UrlEntry>> {
        let entries = self.repository.all().await?;
        self.events.log_event(Event::ViewStatsPage).await;
        Ok(entries)
    }
}

/// Converts an expiry policy into an absolute timestamp.
fn expiry_timestamp(policy: &ExpiryPolicy, now: Timestamp) -> Option<Timestamp> {
    match policy {
        ExpiryPolicy::Never => None,
        ExpiryPolicy::AfterDuration(duration) => Some(now + *duration),
        ExpiryPolicy::AtTimestamp(timestamp) => Some(*timestamp),
    }
}

/// Validates that the URL is absolute with an http(s) scheme and a host.
fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(ShortenerError::InvalidUrl("URL cannot be empty".to_owned()));
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must be absolute: {url}"
        )));
    };

    if rest.is_empty() {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a host: {url}"
        )));
    }

    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL scheme must be http or https: {scheme}"
        )));
    }

    Ok(())
}
