use crate::IdSource;
use linkstash_core::ShortId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic id source using a sequential counter.
///
/// Produces zero-padded decimal ids ("000000", "000001", ...), padded to
/// the requested length. Useful wherever tests need a predictable stream
/// of candidates, e.g. to force a known collision sequence.
#[derive(Debug, Default)]
pub struct SequenceIdSource {
    counter: AtomicU64,
}

impl SequenceIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the counter at a specific value.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl IdSource for SequenceIdSource {
    fn candidate(&self, length: usize) -> ShortId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortId::new_unchecked(format!("{count:0length$}"))
    }
}
