//! Short-id generation for the linkstash URL shortener.
//!
//! An [`IdSource`] produces candidate ids of a requested length with no
//! uniqueness guarantee of its own; [`allocate`] layers the collision
//! policy on top: check candidates against the set of taken ids, escalate
//! to a longer id after repeated collisions, and give up after a bounded
//! number of total attempts.

pub mod error;
pub mod random;
pub mod seq;

pub use error::GeneratorError;
pub use random::RandomIdSource;
pub use seq::SequenceIdSource;

use linkstash_core::ShortId;
use std::collections::HashSet;

/// Length of a freshly generated short id.
pub const BASE_LENGTH: usize = 6;
/// Length used once collisions keep happening.
pub const ESCALATED_LENGTH: usize = 8;

/// After this many colliding candidates, switch to the longer length.
const ESCALATION_THRESHOLD: u32 = 10;
/// Hard cap on total attempts; the id space is large enough that hitting
/// this indicates a broken source rather than bad luck.
const MAX_ATTEMPTS: u32 = 1024;

/// Trait for producing candidate short ids.
///
/// Implementations are pure sources that don't interact with storage and
/// make no uniqueness promise; callers are expected to collision-check.
pub trait IdSource: Send + Sync + 'static {
    /// Produces one candidate of the requested length.
    fn candidate(&self, length: usize) -> ShortId;
}

/// Picks a short id not present in `taken`.
///
/// Attempts 1 through 10 draw [`BASE_LENGTH`] candidates; from the 11th
/// attempt on, candidates are [`ESCALATED_LENGTH`] long to shrink the
/// collision probability. Fails with [`GeneratorError::SpaceExhausted`]
/// once the attempt cap is reached.
pub fn allocate<G: IdSource>(
    source: &G,
    taken: &HashSet<ShortId>,
) -> Result<ShortId, GeneratorError> {
    for attempt in 1..=MAX_ATTEMPTS {
        let length = if attempt > ESCALATION_THRESHOLD {
            ESCALATED_LENGTH
        } else {
            BASE_LENGTH
        };

        let candidate = source.candidate(length);
        if !taken.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GeneratorError::SpaceExhausted {
        attempts: MAX_ATTEMPTS,
    })
}
