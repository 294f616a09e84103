use crate::IdSource;
use linkstash_core::ShortId;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Random alphanumeric id source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl RandomIdSource {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for RandomIdSource {
    fn candidate(&self, length: usize) -> ShortId {
        let id: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();
        ShortId::new_unchecked(id)
    }
}
