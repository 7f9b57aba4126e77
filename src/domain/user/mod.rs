//! User domain — the three-step Twitter login flow and token validation.
//!
//! The flow the sub-client drives:
//!
//! 1. [`Users::login_url`] — obtain the external URL to send the user to.
//! 2. The user authorizes there; the provider redirects back with
//!    `code` + `state`.
//! 3. [`Users::exchange_login`] — trade `code` + `state` for a bearer token.
//! 4. [`Users::validate`] — confirm a token is still good and learn the
//!    user's id.
//!
//! None of these states are held by the SDK; the application stores the
//! token in its [`TokenProvider`](crate::auth::TokenProvider) and decides
//! routing from validation's status-coded errors.

pub mod client;
pub mod wire;

pub use client::Users;
