use crate::error::Result;
use crate::navigator::Navigator;
use linkstash_core::{
    ClickRecord, Clock, Event, EventSink, FailureReason, ShortId, SystemClock,
};
use linkstash_storage::{KvStore, UrlRepository};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Delay between emitting the redirect event and navigating away, so the
/// notification survives until the page is torn down.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(100);

/// What the browser knew about the click.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct RedirectContext {
    /// The referrer, if any.
    #[builder(default, setter(strip_option, into))]
    pub referrer: Option<String>,
    /// A coarse locale string, if known.
    #[builder(default, setter(strip_option, into))]
    pub locale: Option<String>,
}

/// Terminal state of one redirect request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// No entry matches the short id; the user was sent home.
    NotFound,
    /// The entry exists but its expiry has passed; the user was sent home.
    Expired,
    /// The click was handled and the browser was sent to the original URL.
    Redirected { original_url: String },
}

/// The redirect / click-tracking state machine.
///
/// One `handle` call walks RESOLVING → {NOT_FOUND, EXPIRED, RECORDING →
/// REDIRECTING}. Failure states emit a `REDIRECT_FAILED` event and
/// navigate home; the success path records the click, emits `REDIRECT`,
/// waits out the fixed delay, and performs the full navigation.
#[derive(Debug, Clone)]
pub struct RedirectFlow<S, N, E, C = SystemClock> {
    repository: UrlRepository<S>,
    navigator: Arc<N>,
    events: Arc<E>,
    clock: C,
    delay: Duration,
}

impl<S: KvStore, N: Navigator, E: EventSink> RedirectFlow<S, N, E> {
    pub fn new(repository: UrlRepository<S>, navigator: N, events: E) -> Self {
        Self {
            repository,
            navigator: Arc::new(navigator),
            events: Arc::new(events),
            clock: SystemClock,
            delay: DEFAULT_REDIRECT_DELAY,
        }
    }
}

impl<S: KvStore, N: Navigator, E: EventSink, C: Clock> RedirectFlow<S, N, E, C> {
    /// Replaces the clock, e.g. with a manual clock in tests.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> RedirectFlow<S, N, E, C2> {
        RedirectFlow {
            repository: self.repository,
            navigator: self.navigator,
            events: self.events,
            clock,
            delay: self.delay,
        }
    }

    /// Overrides the pre-navigation delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns a handle to the navigator this flow drives.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Handles one redirect request for `short_id`.
    pub async fn handle(
        &self,
        short_id: &ShortId,
        context: &RedirectContext,
    ) -> Result<RedirectOutcome> {
        trace!(id = %short_id, "resolving short id");

        let Some(entry) = self.repository.get(short_id).await? else {
            debug!(id = %short_id, "short id not found");
            self.fail(short_id, FailureReason::NotFound).await;
            return Ok(RedirectOutcome::NotFound);
        };

        let now = self.clock.now();
        if entry.is_expired_at(now) {
            debug!(id = %short_id, "short link has expired");
            self.fail(short_id, FailureReason::Expired).await;
            return Ok(RedirectOutcome::Expired);
        }

        // The destination is captured here; a failed click update below
        // must not stop the redirect.
        let original_url = entry.original_url;

        let click = ClickRecord::new(now, context.referrer.clone(), context.locale.clone());
        match self.repository.record_click(short_id, click).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(id = %short_id, "entry disappeared before the click was recorded, redirecting anyway");
            }
            Err(e) => {
                warn!(id = %short_id, error = %e, "click was not recorded, redirecting anyway");
            }
        }

        self.events
            .log_event(Event::Redirect {
                short_id: short_id.clone(),
                original_url: original_url.clone(),
            })
            .await;

        // Let the success notification persist before navigation tears
        // the page down. Once scheduled, the navigation always fires.
        tokio::time::sleep(self.delay).await;
        self.navigator.redirect(&original_url);

        Ok(RedirectOutcome::Redirected { original_url })
    }

    async fn fail(&self, short_id: &ShortId, reason: FailureReason) {
        self.events
            .log_event(Event::RedirectFailed {
                short_id: short_id.clone(),
                reason,
            })
            .await;
        self.navigator.home_replace();
    }
}
