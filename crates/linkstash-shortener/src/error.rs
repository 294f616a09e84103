use linkstash_core::StorageError;
use linkstash_generator::GeneratorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("id allocation failed: {0}")]
    IdAllocation(#[from] GeneratorError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
