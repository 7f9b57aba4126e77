//! HTTP client layer — `ChirpHttp`.

pub mod client;

pub use client::ChirpHttp;
pub(crate) use client::Auth;
