//! High-level client — `ChirpClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods. The client holds
//! no caches and no session state: everything it returns comes straight off
//! the wire, and the bearer token lives in the injected [`TokenProvider`].

use crate::auth::{TokenProvider, TokenStore};
use crate::domain::execution::client::Executions;
use crate::domain::tweet::client::Tweets;
use crate::domain::user::client::Users;
use crate::http::ChirpHttp;
use crate::network::DEFAULT_API_URL;

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::execution::client::Executions as ExecutionsClient;
pub use crate::domain::tweet::client::Tweets as TweetsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the Chirp SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.executions()`, `client.tweets()`, `client.users()`.
///
/// Construct one per application and pass it by reference (or clone it —
/// clones share the underlying connection pool and token provider).
#[derive(Clone)]
pub struct ChirpClient {
    pub(crate) http: ChirpHttp,
}

impl ChirpClient {
    pub fn builder() -> ChirpClientBuilder {
        ChirpClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn executions(&self) -> Executions<'_> {
        Executions { client: self }
    }

    pub fn tweets(&self) -> Tweets<'_> {
        Tweets { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ChirpClientBuilder {
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl Default for ChirpClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            tokens: Arc::new(TokenStore::new()),
        }
    }
}

impl ChirpClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Inject the credential source for authenticated calls.
    ///
    /// Defaults to an empty [`TokenStore`] nothing else holds a handle to —
    /// an application that logs in must pass its own store (or provider)
    /// here so it can write the exchanged token into it.
    pub fn token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn build(self) -> ChirpClient {
        ChirpClient {
            http: ChirpHttp::new(&self.base_url, self.tokens),
        }
    }
}
