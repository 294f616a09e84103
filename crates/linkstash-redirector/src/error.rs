use linkstash_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedirectError>;

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
