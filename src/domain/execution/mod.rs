//! Execution domain — CRUD access to a user's executions.

pub mod client;
pub mod wire;

pub use client::Executions;

/// One run of an external process, persisted by the server.
///
/// The client never interprets executions: they are caller-defined records,
/// carried opaquely and echoed back by the server on save/update.
pub type Execution = serde_json::Value;
