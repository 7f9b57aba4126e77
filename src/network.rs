//! Network URL constants for the Chirp SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
