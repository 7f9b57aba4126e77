//! Tweet domain — posting and listing tweets.

pub mod client;
pub mod wire;

pub use client::Tweets;

/// Server-side rendering of a posted tweet, returned for display.
///
/// Carried opaquely — the shape is whatever the backend's embed provider
/// produces.
pub type Embed = serde_json::Value;
