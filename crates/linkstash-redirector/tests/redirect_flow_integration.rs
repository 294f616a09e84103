//! End-to-end exercise of the shorten → redirect → stats pipeline over a
//! single shared store, the way a browser session would drive it.

use jiff::{SignedDuration, Timestamp};
use linkstash_core::{Event, FailureReason, ManualClock, ShortId};
use linkstash_generator::RandomIdSource;
use linkstash_redirector::{Navigation, RecordingNavigator, RedirectContext, RedirectFlow};
use linkstash_shortener::{ExpiryPolicy, ShortenOutcome, ShortenRequest, ShortenerService};
use linkstash_storage::{EventLog, FileStore, MemoryStore, UrlRepository};
use std::time::Duration;

struct Fixture {
    store: MemoryStore,
    clock: ManualClock,
    shortener: ShortenerService<MemoryStore, RandomIdSource, EventLog<MemoryStore>, ManualClock>,
    flow: RedirectFlow<MemoryStore, RecordingNavigator, EventLog<MemoryStore>, ManualClock>,
}

impl Fixture {
    fn new() -> Self {
        let store = MemoryStore::new();
        let clock = ManualClock::new(Timestamp::from_second(1_000_000).unwrap());

        let shortener = ShortenerService::new(
            UrlRepository::new(store.clone()),
            RandomIdSource::new(),
            EventLog::new(store.clone()),
        )
        .with_clock(clock.clone());

        let flow = RedirectFlow::new(
            UrlRepository::new(store.clone()),
            RecordingNavigator::new(),
            EventLog::new(store.clone()),
        )
        .with_clock(clock.clone())
        .with_delay(Duration::ZERO);

        Self {
            store,
            clock,
            shortener,
            flow,
        }
    }

    async fn shorten(&self, url: &str, expiry: ExpiryPolicy) -> ShortId {
        let outcome = self
            .shortener
            .shorten(
                ShortenRequest::builder()
                    .original_url(url)
                    .expiry(expiry)
                    .build(),
            )
            .await
            .unwrap();
        match outcome {
            ShortenOutcome::Created(entry) => entry.short_id,
            ShortenOutcome::Duplicate { original_url } => {
                panic!("unexpected duplicate for {original_url}")
            }
        }
    }

    async fn event_types(&self) -> Vec<Event> {
        EventLog::new(self.store.clone())
            .events()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.event)
            .collect()
    }
}

#[tokio::test]
async fn shorten_then_redirect_records_the_click() {
    let fixture = Fixture::new();

    let short_id = fixture
        .shorten("https://example.com/some/long/path", ExpiryPolicy::Never)
        .await;

    let context = RedirectContext::builder().locale("en-US").build();
    fixture.flow.handle(&short_id, &context).await.unwrap();

    assert_eq!(
        fixture.flow.navigator().actions(),
        vec![Navigation::Redirect(
            "https://example.com/some/long/path".to_owned()
        )]
    );

    let entries = fixture.shortener.entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].clicks, 1);
    assert_eq!(entries[0].click_details[0].source, "Direct");
    assert_eq!(entries[0].click_details[0].geo, "en-US");

    let events = fixture.event_types().await;
    assert!(matches!(events[0], Event::UrlShortened { .. }));
    assert!(matches!(events[1], Event::Redirect { .. }));
}

#[tokio::test]
async fn link_expires_as_the_clock_passes_its_deadline() {
    let fixture = Fixture::new();

    let short_id = fixture
        .shorten(
            "https://example.com",
            ExpiryPolicy::AfterDuration(SignedDuration::from_mins(30)),
        )
        .await;

    // Still inside the window.
    let outcome = fixture
        .flow
        .handle(&short_id, &RedirectContext::default())
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        linkstash_redirector::RedirectOutcome::Redirected { .. }
    ));

    // One millisecond past the deadline.
    fixture
        .clock
        .advance(SignedDuration::from_mins(30) + SignedDuration::from_millis(1));
    let outcome = fixture
        .flow
        .handle(&short_id, &RedirectContext::default())
        .await
        .unwrap();
    assert_eq!(outcome, linkstash_redirector::RedirectOutcome::Expired);

    // Only the first redirect was counted.
    let entries = fixture.shortener.entries().await.unwrap();
    assert_eq!(entries[0].clicks, 1);

    let events = fixture.event_types().await;
    assert!(matches!(
        events.last(),
        Some(Event::RedirectFailed {
            reason: FailureReason::Expired,
            ..
        })
    ));
}

#[tokio::test]
async fn stats_view_reflects_clicks_and_logs_itself() {
    let fixture = Fixture::new();

    let first = fixture.shorten("https://one.example", ExpiryPolicy::Never).await;
    let _second = fixture.shorten("https://two.example", ExpiryPolicy::Never).await;

    fixture
        .flow
        .handle(&first, &RedirectContext::default())
        .await
        .unwrap();

    let entries = fixture.shortener.stats().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].clicks, 1);
    assert_eq!(entries[1].clicks, 0);

    let events = fixture.event_types().await;
    assert_eq!(events.last(), Some(&Event::ViewStatsPage));
}

#[tokio::test]
async fn state_survives_a_restart_with_a_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(Timestamp::from_second(1_000_000).unwrap());

    let short_id = {
        let store = FileStore::open(dir.path()).unwrap();
        let shortener = ShortenerService::new(
            UrlRepository::new(store.clone()),
            RandomIdSource::new(),
            EventLog::new(store),
        )
        .with_clock(clock.clone());

        let outcome = shortener
            .shorten(
                ShortenRequest::builder()
                    .original_url("https://example.com")
                    .build(),
            )
            .await
            .unwrap();
        match outcome {
            ShortenOutcome::Created(entry) => entry.short_id,
            other => panic!("unexpected outcome: {other:?}"),
        }
    };

    // "Reopen the browser": fresh handles over the same directory.
    let store = FileStore::open(dir.path()).unwrap();
    let flow = RedirectFlow::new(
        UrlRepository::new(store.clone()),
        RecordingNavigator::new(),
        EventLog::new(store.clone()),
    )
    .with_clock(clock)
    .with_delay(Duration::ZERO);

    let outcome = flow
        .handle(&short_id, &RedirectContext::default())
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        linkstash_redirector::RedirectOutcome::Redirected { .. }
    ));

    let entry = UrlRepository::new(store).get(&short_id).await.unwrap().unwrap();
    assert_eq!(entry.clicks, 1);
}
