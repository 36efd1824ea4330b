//! Porkbun DNS provider.
//!
//! - [`PorkbunClient`] - [`crate::domain::provider::DnsProvider`] over the JSON API v3
//! - [`RetryPolicy`] - Backoff applied uniformly to every outbound call

mod client;
mod retry;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PorkbunClient};
pub use retry::RetryPolicy;
