//! Provider trait for DNS record access.

use crate::domain::entities::{Credentials, DnsRecord, RecordPayload};
use async_trait::async_trait;

/// Errors returned by a [`DnsProvider`] call.
///
/// Messages never include request bodies, so credentials cannot leak into
/// logs through these values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// No connection could be established (DNS/TCP/TLS). The provider
    /// never saw the request.
    #[error("connect error: {0}")]
    Connect(String),

    /// The connection failed after the request may have been sent.
    #[error("transport error: {0}")]
    Transport(String),

    /// The per-call timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The provider answered with a non-2xx status.
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The provider answered 2xx with an `ERROR` status envelope.
    #[error("provider rejected the request: {0}")]
    Rejected(String),

    /// The response body could not be decoded.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Statuses that are retried before a call is given up on.
    pub const RETRY_STATUSES: [u16; 4] = [500, 502, 503, 504];

    /// Returns true if the call may succeed when repeated.
    ///
    /// Connect failures and gateway/server errors are retried. Anything that
    /// may have reached the provider without a definite answer (timeouts,
    /// dropped connections) is not, so a create is never sent twice.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connect(_) => true,
            Self::Status { status, .. } => Self::RETRY_STATUSES.contains(status),
            Self::Transport(_) | Self::Timeout | Self::Rejected(_) | Self::InvalidResponse(_) => false,
        }
    }
}

/// Interface to a DNS hosting provider.
///
/// All calls take the caller's credentials explicitly; implementations must
/// not store them between calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::porkbun::PorkbunClient`] - Porkbun JSON API v3
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Lists every record in the zone of `domain` (a registrable domain).
    ///
    /// # Errors
    ///
    /// Any failure is returned as a whole; no partial list is produced.
    async fn retrieve_records(
        &self,
        domain: &str,
        credentials: &Credentials,
    ) -> Result<Vec<DnsRecord>, ProviderError>;

    /// Creates a record in the zone of `domain`.
    async fn create_record(
        &self,
        domain: &str,
        credentials: &Credentials,
        record: &RecordPayload,
    ) -> Result<(), ProviderError>;

    /// Replaces the record `record_id` in the zone of `domain`.
    async fn edit_record(
        &self,
        domain: &str,
        record_id: &str,
        credentials: &Credentials,
        record: &RecordPayload,
    ) -> Result<(), ProviderError>;
}
