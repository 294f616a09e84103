use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const MAX_LENGTH: usize = 32;

/// A validated short identifier for a shortened URL.
///
/// Short ids are non-empty, at most 32 characters, and contain only
/// ASCII alphanumeric characters. They are immutable once created and
/// act as the unique key of a [`UrlEntry`][crate::entry::UrlEntry].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ShortId {
    /// Creates a new `ShortId` after validating the input.
    pub fn new(id: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Creates a `ShortId` without validation.
    ///
    /// Use this only for ids produced by trusted internal sources
    /// (e.g. the id generator, which only emits alphanumeric output).
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the short id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the short-link path for this id (`/s/<shortId>`).
    pub fn to_path(&self) -> String {
        format!("/s/{}", self.0)
    }

    fn validate(id: &str) -> std::result::Result<(), CoreError> {
        if id.is_empty() || id.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortId(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                id.len()
            )));
        }

        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only alphanumeric characters: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
