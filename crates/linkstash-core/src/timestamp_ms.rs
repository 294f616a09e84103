//! Serde adapters for timestamps stored as integer epoch-milliseconds.
//!
//! The persisted data namespace keeps every timestamp as a plain i64 of
//! milliseconds since the Unix epoch, so documents written by older
//! deployments remain readable byte-for-byte.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    ts.as_millisecond().serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
    let ms = i64::deserialize(deserializer)?;
    Timestamp::from_millisecond(ms).map_err(serde::de::Error::custom)
}

/// Adapter for `Option<Timestamp>` fields (`null` means "never").
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        ts: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        ts.map(|t| t.as_millisecond()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        Option::<i64>::deserialize(deserializer)?
            .map(Timestamp::from_millisecond)
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}
