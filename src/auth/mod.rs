//! Credential provision — where authenticated calls get their bearer token.
//!
//! The SDK never owns a session. The application injects a [`TokenProvider`]
//! at client construction; the HTTP layer queries it immediately before every
//! authenticated request, so a token swapped mid-flight takes effect on the
//! next call.

use std::sync::RwLock;

/// Source of the bearer token attached to authenticated requests.
///
/// Queried fresh on every authenticated call — implementations may rotate the
/// token at any time and the HTTP layer will pick it up without caching.
pub trait TokenProvider: Send + Sync {
    /// The current token, or `None` when no session exists.
    ///
    /// When `None`, the request is sent without an `Authorization` header and
    /// the server's rejection surfaces through the normal error paths.
    fn token(&self) -> Option<String>;
}

/// In-memory token store — the default provider.
///
/// The application keeps a handle to the store, writes the token obtained
/// from the login exchange into it, and clears it on logout:
///
/// ```rust,ignore
/// let store = Arc::new(TokenStore::new());
/// let client = ChirpClient::builder()
///     .token_provider(store.clone())
///     .build();
///
/// let token = client.users().exchange_login(&code, &state).await?;
/// store.set(token);
/// ```
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored token.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    /// Drop the stored token, e.g. on logout or a 401 from validation.
    pub fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    pub fn get(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }
}

impl TokenProvider for TokenStore {
    fn token(&self) -> Option<String> {
        self.get()
    }
}
