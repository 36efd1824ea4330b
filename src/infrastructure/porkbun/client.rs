//! Porkbun JSON API v3 client.
//!
//! Every endpoint is a `POST` carrying `apikey` and `secretapikey` in the JSON
//! body. Responses share a `{ "status": "SUCCESS" | "ERROR", "message": ... }`
//! envelope; the retrieve endpoint adds a `records` array.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_retry::RetryIf;
use tracing::debug;
use url::Url;

use super::retry::RetryPolicy;
use crate::domain::entities::{Credentials, DnsRecord, RecordPayload};
use crate::domain::provider::{DnsProvider, ProviderError};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.porkbun.com/api/json/v3";

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest error body excerpt kept in a [`ProviderError::Status`].
const MAX_ERROR_EXCERPT: usize = 200;

#[derive(Serialize)]
struct AuthBody<'a> {
    apikey: &'a str,
    secretapikey: &'a str,
}

impl<'a> From<&'a Credentials> for AuthBody<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            apikey: credentials.api_key(),
            secretapikey: credentials.secret_key(),
        }
    }
}

#[derive(Serialize)]
struct RecordBody<'a> {
    #[serde(flatten)]
    auth: AuthBody<'a>,
    #[serde(flatten)]
    record: &'a RecordPayload,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: Option<String>,
    message: Option<String>,
    #[serde(default)]
    records: Vec<DnsRecord>,
}

/// HTTP client for Porkbun's DNS endpoints.
///
/// Built once at startup and shared by all requests. The retry policy and
/// per-call timeout are fixed at construction; credentials are passed on
/// each call and never stored.
#[derive(Debug, Clone)]
pub struct PorkbunClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    retry: RetryPolicy,
}

impl PorkbunClient {
    /// Creates a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the TLS backend cannot be
    /// initialised.
    pub fn new(base_url: Url, timeout: Duration, retry: RetryPolicy) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self::with_client(http, base_url, timeout, retry))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            http,
            base_url,
            timeout,
            retry,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends `body` to `url`, retrying per the client's [`RetryPolicy`].
    async fn post<B>(&self, url: &Url, body: &B) -> Result<Envelope, ProviderError>
    where
        B: Serialize + Sync + ?Sized,
    {
        RetryIf::start(
            self.retry.delays(),
            || self.send_once(url, body),
            |err: &ProviderError| {
                let retry = err.is_retryable();
                if retry {
                    debug!(path = url.path(), error = %err, "Retryable provider error");
                }
                retry
            },
        )
        .await
    }

    async fn send_once<B>(&self, url: &Url, body: &B) -> Result<Envelope, ProviderError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = self
            .http
            .post(url.clone())
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: error_excerpt(&text),
            });
        }

        let envelope: Envelope = serde_json::from_str(&text)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        match envelope.status.as_deref() {
            Some(s) if !s.eq_ignore_ascii_case("SUCCESS") => Err(ProviderError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| format!("status {s}")),
            )),
            _ => Ok(envelope),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_connect() {
        ProviderError::Connect(err.without_url().to_string())
    } else if err.is_timeout() {
        ProviderError::Timeout
    } else if err.is_decode() {
        ProviderError::InvalidResponse(err.without_url().to_string())
    } else {
        ProviderError::Transport(err.without_url().to_string())
    }
}

/// Prefers the envelope `message`, falling back to a truncated raw body.
fn error_excerpt(body: &str) -> String {
    if let Ok(Envelope {
        message: Some(message),
        ..
    }) = serde_json::from_str::<Envelope>(body)
    {
        return message;
    }

    body.chars().take(MAX_ERROR_EXCERPT).collect()
}

#[async_trait]
impl DnsProvider for PorkbunClient {
    async fn retrieve_records(
        &self,
        domain: &str,
        credentials: &Credentials,
    ) -> Result<Vec<DnsRecord>, ProviderError> {
        let url = self.endpoint(&["dns", "retrieve", domain]);
        debug!(domain, "Retrieving DNS records");

        let envelope = self.post(&url, &AuthBody::from(credentials)).await?;
        debug!(domain, count = envelope.records.len(), "Retrieved DNS records");

        Ok(envelope.records)
    }

    async fn create_record(
        &self,
        domain: &str,
        credentials: &Credentials,
        record: &RecordPayload,
    ) -> Result<(), ProviderError> {
        let url = self.endpoint(&["dns", "create", domain]);
        let body = RecordBody {
            auth: credentials.into(),
            record,
        };

        self.post(&url, &body).await.map(|_| ()).inspect_err(|e| {
            debug!(domain, record_type = %record.record_type, error = %e, "Create call failed");
        })
    }

    async fn edit_record(
        &self,
        domain: &str,
        record_id: &str,
        credentials: &Credentials,
        record: &RecordPayload,
    ) -> Result<(), ProviderError> {
        let url = self.endpoint(&["dns", "edit", domain, record_id]);
        let body = RecordBody {
            auth: credentials.into(),
            record,
        };

        self.post(&url, &body).await.map(|_| ()).inspect_err(|e| {
            debug!(domain, record_id, record_type = %record.record_type, error = %e, "Edit call failed");
        })
    }
}
