//! Tweets sub-client — post a tweet, list rendered embeds.

use crate::client::ChirpClient;
use crate::domain::require_field;
use crate::domain::tweet::wire::{EmbedsEnvelope, ErrorBody};
use crate::domain::tweet::Embed;
use crate::error::SdkError;
use crate::http::Auth;

use reqwest::{Method, StatusCode};
use serde_json::json;

pub struct Tweets<'a> {
    pub(crate) client: &'a ChirpClient,
}

impl<'a> Tweets<'a> {
    /// Ask the backend to compose and post a tweet about `topic`.
    ///
    /// The backend queues the work and answers `202 Accepted` with no
    /// envelope — unlike every other operation, success here is decided by
    /// the status code alone, and the body is only parsed on rejection.
    /// Callers must not assume the tweet exists yet when this returns.
    pub async fn post(&self, topic: &str) -> Result<(), SdkError> {
        let url = format!("{}/api/tweet", self.client.http.base_url());
        let resp = self
            .client
            .http
            .send(Method::POST, &url, Some(&json!({ "topic": topic })), Auth::Bearer)
            .await?;

        if resp.status() == StatusCode::ACCEPTED {
            return Ok(());
        }

        let body: ErrorBody = resp.json().await?;
        Err(SdkError::Api(
            body.message
                .unwrap_or_else(|| "Error posting tweet".to_string()),
        ))
    }

    /// List the authenticated user's tweets as rendered embeds.
    pub async fn list_for_user(&self) -> Result<Vec<Embed>, SdkError> {
        let url = format!("{}/api/tweet/all/user", self.client.http.base_url());
        let envelope: EmbedsEnvelope = self.client.http.get(&url, Auth::Bearer).await?;
        require_field(envelope.embeds, envelope.message, "Error getting tweets")
    }

    /// List the public timeline. No authentication — the token provider is
    /// not consulted even when it holds a token.
    pub async fn list_public(&self) -> Result<Vec<Embed>, SdkError> {
        let url = format!("{}/api/tweet/all", self.client.http.base_url());
        let envelope: EmbedsEnvelope = self.client.http.get(&url, Auth::Anonymous).await?;
        require_field(envelope.embeds, envelope.message, "Error getting tweets")
    }
}
