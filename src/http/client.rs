//! Low-level HTTP client — `ChirpHttp`.
//!
//! Builds requests, injects the bearer token, and parses JSON envelopes.
//! Internal to the SDK — the domain sub-clients wrap this.

use crate::auth::TokenProvider;
use crate::error::SdkError;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Whether a request carries the provider's bearer token.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Auth {
    Bearer,
    Anonymous,
}

/// Low-level HTTP client for the Chirp REST API.
#[derive(Clone)]
pub struct ChirpHttp {
    base_url: String,
    client: Client,
    /// Queried immediately before every authenticated request — the token is
    /// never cached here.
    tokens: Arc<dyn TokenProvider>,
}

impl ChirpHttp {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Envelope-driven requests ─────────────────────────────────────────
    //
    // The body is parsed as JSON regardless of HTTP status: the server
    // reports failure through the envelope's `message` field, and the
    // sub-clients decide success by the presence of their one expected
    // field, not by status code.

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        auth: Auth,
    ) -> Result<T, SdkError> {
        let resp = self.send::<()>(Method::GET, url, None, auth).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<T, SdkError> {
        let resp = self.send(Method::POST, url, body, auth).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<T, SdkError> {
        let resp = self.send(Method::PUT, url, body, auth).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        url: &str,
        auth: Auth,
    ) -> Result<T, SdkError> {
        let resp = self.send::<()>(Method::DELETE, url, None, auth).await?;
        Ok(resp.json().await?)
    }

    // ── Status-aware requests ────────────────────────────────────────────

    /// Send a request and hand the raw response back to the caller.
    ///
    /// Used by the two operations whose outcome depends on the HTTP status
    /// (tweet posting and token validation).
    pub(crate) async fn send<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Response, SdkError> {
        let mut req = self.client.request(method.clone(), url);

        if let Auth::Bearer = auth {
            // Raw token value, no scheme prefix — the backend expects the
            // bare credential in the Authorization header.
            if let Some(token) = self.tokens.token() {
                req = req.header("Authorization", token);
            }
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(%method, url, "sending request");
        Ok(req.send().await?)
    }

    /// GET with a caller-supplied token instead of the provider's.
    ///
    /// Token validation authenticates with the token under test, which may
    /// not be the session token the provider would hand out.
    pub(crate) async fn get_with_token(
        &self,
        url: &str,
        token: &str,
    ) -> Result<Response, SdkError> {
        tracing::debug!(url, "sending request");
        Ok(self
            .client
            .get(url)
            .header("Authorization", token)
            .send()
            .await?)
    }
}
