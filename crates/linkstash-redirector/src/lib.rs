//! Redirect and click-tracking flow for the linkstash shortener.
//!
//! Resolves a short id, validates expiry, records the click, and hands
//! the browser off to the original URL through a [`Navigator`] port.

pub mod error;
pub mod flow;
pub mod navigator;

pub use error::RedirectError;
pub use flow::{RedirectContext, RedirectFlow, RedirectOutcome};
pub use navigator::{Navigation, Navigator, RecordingNavigator};
