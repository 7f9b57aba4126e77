//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — domain types
//! - `wire.rs` — raw serde structs matching backend envelopes
//! - `client.rs` — sub-client with HTTP methods
//!
//! Every envelope has exactly one expected success field; its absence means
//! failure regardless of HTTP status.

pub mod execution;
pub mod tweet;
pub mod user;

pub(crate) mod serde_util;

use crate::error::SdkError;

/// Unwrap an envelope's success field, or raise the server's `message`
/// (falling back to the operation's default text).
pub(crate) fn require_field<T>(
    value: Option<T>,
    message: Option<String>,
    default: &str,
) -> Result<T, SdkError> {
    match value {
        Some(v) => Ok(v),
        None => Err(SdkError::Api(message.unwrap_or_else(|| default.to_string()))),
    }
}
