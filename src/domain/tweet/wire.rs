//! Wire envelopes for tweet responses.

use serde::Deserialize;
use serde_json::Value;

/// Envelope for the two list endpoints.
#[derive(Debug, Deserialize)]
pub struct EmbedsEnvelope {
    pub embeds: Option<Vec<Value>>,
    pub message: Option<String>,
}

/// Error body parsed when posting a tweet is rejected. Posting has no
/// success envelope — a 202 status is the whole success signal.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
