//! # Chirp SDK
//!
//! A Rust client for the Chirp tweet-automation backend: Twitter login,
//! posting and listing tweets, and CRUD on executions.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — error types, network constants, domain wire types
//! 2. **Auth** — `TokenProvider` credential injection
//! 3. **HTTP** — `ChirpHttp`, a thin request/envelope layer
//! 4. **High-Level Client** — `ChirpClient` with nested sub-clients
//!
//! Every call issues exactly one request and returns the envelope's payload
//! untouched, or an error built from the envelope's `message`. There are no
//! retries, no caches, and no session state inside the SDK.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chirp_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(TokenStore::new());
//! let client = ChirpClient::builder()
//!     .base_url("http://localhost:8080")
//!     .token_provider(store.clone())
//!     .build();
//!
//! // Login handshake
//! let login_url = client.users().login_url().await?;
//! // ... user authorizes externally, redirect hands back code + state ...
//! let token = client.users().exchange_login(&code, &state).await?;
//! store.set(token);
//!
//! // Authenticated calls
//! client.tweets().post("rust release notes").await?;
//! let executions = client.executions().list().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credential provision: `TokenProvider` + in-memory `TokenStore`.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP request/envelope layer.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `ChirpClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::execution::Execution;
    pub use crate::domain::tweet::Embed;

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{TokenProvider, TokenStore};

    // Client + sub-clients
    pub use crate::client::{
        ChirpClient, ChirpClientBuilder, ExecutionsClient, TweetsClient, UsersClient,
    };
}
