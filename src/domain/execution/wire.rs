//! Wire envelopes for execution responses.

use crate::domain::serde_util;
use serde::Deserialize;
use serde_json::Value;

/// Envelope for save/update: `execution` on success, `message` on failure.
///
/// The success key signals success by presence alone — a present `null`
/// still resolves, so the field keeps `Value::Null` apart from "absent".
#[derive(Debug, Deserialize)]
pub struct ExecutionEnvelope {
    #[serde(default, deserialize_with = "serde_util::present")]
    pub execution: Option<Value>,
    pub message: Option<String>,
}

/// Envelope for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ExecutionsEnvelope {
    pub executions: Option<Vec<Value>>,
    pub message: Option<String>,
}

/// Envelope for delete: the server reports an opaque `result`, which may
/// itself be `null`.
#[derive(Debug, Deserialize)]
pub struct DeleteEnvelope {
    #[serde(default, deserialize_with = "serde_util::present")]
    pub result: Option<Value>,
    pub message: Option<String>,
}
