use jiff::{SignedDuration, Timestamp};
use std::sync::{Arc, Mutex};

/// Source of the current time.
///
/// Expiry checks and click timestamps go through this trait so tests can
/// pin the clock and exercise boundaries to the millisecond.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current time of the clock.
    fn now(&self) -> Timestamp;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that only moves when told to.
///
/// Intended for tests; shared clones observe the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Timestamp>>,
}

impl ManualClock {
    /// Creates a manual clock pinned at the given instant.
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Moves the clock forward (or backward) by the given duration.
    pub fn advance(&self, by: SignedDuration) {
        let mut now = self.now.lock().expect("manual clock lock poisoned");
        *now += by;
    }

    /// Pins the clock at a new instant.
    pub fn set(&self, to: Timestamp) {
        let mut now = self.now.lock().expect("manual clock lock poisoned");
        *now = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().expect("manual clock lock poisoned")
    }
}
