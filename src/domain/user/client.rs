//! Users sub-client — login handshake and token validation.

use crate::client::ChirpClient;
use crate::domain::require_field;
use crate::domain::user::wire::{LoginUrlEnvelope, TokenEnvelope, ValidateEnvelope};
use crate::error::SdkError;
use crate::http::Auth;

use reqwest::StatusCode;
use serde_json::json;

pub struct Users<'a> {
    pub(crate) client: &'a ChirpClient,
}

impl<'a> Users<'a> {
    /// Request the external login URL to navigate the user to.
    pub async fn login_url(&self) -> Result<String, SdkError> {
        let url = format!("{}/api/user/login/url", self.client.http.base_url());
        let envelope: LoginUrlEnvelope = self
            .client
            .http
            .post::<_, ()>(&url, None, Auth::Anonymous)
            .await?;
        require_field(envelope.url, envelope.message, "Error getting login url")
    }

    /// Exchange the provider's redirect `code` + `state` for a bearer token.
    ///
    /// The SDK does not store the token — write it into your
    /// [`TokenProvider`](crate::auth::TokenProvider) to authenticate
    /// subsequent calls.
    pub async fn exchange_login(&self, code: &str, state: &str) -> Result<String, SdkError> {
        let url = format!("{}/api/user/login/callback", self.client.http.base_url());
        let envelope: TokenEnvelope = self
            .client
            .http
            .post(
                &url,
                Some(&json!({ "code": code, "state": state })),
                Auth::Anonymous,
            )
            .await?;
        require_field(envelope.token, envelope.message, "Error executing login")
    }

    /// Validate `token` and return the id of the user it belongs to.
    ///
    /// Authenticates with the given token, not the provider's — callers
    /// validate candidate tokens before committing them to a session.
    ///
    /// The only operation that raises [`SdkError::Status`]: a 401 means the
    /// token was rejected (redirect to login), any other status without a
    /// `userId` is a server fault. Both carry the server's `message` when it
    /// sent one.
    pub async fn validate(&self, token: &str) -> Result<String, SdkError> {
        let url = format!("{}/api/user/validate", self.client.http.base_url());
        let resp = self.client.http.get_with_token(&url, token).await?;

        let status = resp.status();
        let envelope: ValidateEnvelope = resp.json().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(SdkError::Status {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Unauthorized".to_string()),
            });
        }

        match envelope.user_id {
            Some(id) => Ok(id),
            None => Err(SdkError::Status {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Internal server error".to_string()),
            }),
        }
    }
}
