//! Wire envelopes for user/login responses.

use serde::Deserialize;

/// Envelope for the login-URL request.
#[derive(Debug, Deserialize)]
pub struct LoginUrlEnvelope {
    pub url: Option<String>,
    pub message: Option<String>,
}

/// Envelope for the code/state exchange.
#[derive(Debug, Deserialize)]
pub struct TokenEnvelope {
    pub token: Option<String>,
    pub message: Option<String>,
}

/// Envelope for token validation.
#[derive(Debug, Deserialize)]
pub struct ValidateEnvelope {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub message: Option<String>,
}
