//! DTOs for the DNS update endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::{Credentials, DomainName, OperationResult, UpdateRequest};
use crate::error::AppError;

/// A required parameter that was missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestValidationError {
    #[error("Missing required parameter: apiKey")]
    MissingApiKey,

    #[error("Missing required parameter: secretKey")]
    MissingSecretKey,

    #[error("Missing required parameter: domain")]
    MissingDomain,

    #[error("At least one of ipv4address or ipv6address is required")]
    MissingAddress,
}

impl From<RequestValidationError> for AppError {
    fn from(err: RequestValidationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// Query parameters of `GET /update-dns-record`.
///
/// Empty values are treated the same as absent ones.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRecordQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(rename = "secretKey", default)]
    pub secret_key: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub domain: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(ip(v4, message = "Invalid IPv4 address in ipv4address"))]
    pub ipv4address: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(ip(v6, message = "Invalid IPv6 address in ipv6address"))]
    pub ipv6address: Option<String>,
}

impl UpdateRecordQuery {
    /// Returns `(apiKey, secretKey, domain)` once every required parameter
    /// is known to be present.
    ///
    /// Checks run in a fixed order (apiKey, secretKey, domain, addresses) and
    /// the first missing one is reported.
    pub fn required_fields(&self) -> Result<(&str, &str, &str), RequestValidationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(RequestValidationError::MissingApiKey)?;
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or(RequestValidationError::MissingSecretKey)?;
        let domain = self
            .domain
            .as_deref()
            .ok_or(RequestValidationError::MissingDomain)?;

        if self.ipv4address.is_none() && self.ipv6address.is_none() {
            return Err(RequestValidationError::MissingAddress);
        }

        Ok((api_key, secret_key, domain))
    }

    /// Validates the query and turns it into an [`UpdateRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required parameter is missing,
    /// an address is malformed, or the domain has no registrable part.
    pub fn into_update_request(self) -> Result<UpdateRequest, AppError> {
        let (api_key, secret_key, domain) = self.required_fields()?;
        self.validate()?;

        let domain = DomainName::parse(domain)?;
        let credentials = Credentials::new(api_key, secret_key);

        Ok(UpdateRequest::new(
            domain,
            credentials,
            self.ipv4address,
            self.ipv6address,
        ))
    }
}

/// Successful response: one entry per processed record type.
#[derive(Debug, Serialize)]
pub struct UpdateRecordResponse {
    pub responses: Vec<OperationResult>,
}
