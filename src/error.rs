//! Application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::entities::DomainParseError;

/// Message returned when existing records cannot be fetched.
pub const RETRIEVE_FAILED_MESSAGE: &str = "Failed to retrieve DNS records";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors that abort a request.
///
/// Per-record create/edit failures are not represented here; they are
/// returned as failed [`crate::domain::entities::OperationResult`] entries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed request input. Rendered as 400.
    #[error("{message}")]
    Validation { message: String },

    /// The provider could not be queried. Rendered as 500.
    #[error("{message}")]
    Upstream { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    /// Uses the first failing field in name order so the message is stable.
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let message = fields
            .into_iter()
            .find_map(|(field, errs)| {
                errs.first().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}"))
                })
            })
            .unwrap_or_else(|| "Invalid request parameters".to_string());

        AppError::bad_request(message)
    }
}

impl From<DomainParseError> for AppError {
    fn from(err: DomainParseError) -> Self {
        let message = match err {
            DomainParseError::Empty => "Missing required parameter: domain".to_string(),
            DomainParseError::UnknownSuffix(domain) => format!("Invalid domain: {domain}"),
        };
        AppError::bad_request(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::upstream(RETRIEVE_FAILED_MESSAGE).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_validation_errors_picks_first_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "ipv6address",
            ValidationError::new("ip").with_message("bad v6".into()),
        );
        errors.add(
            "ipv4address",
            ValidationError::new("ip").with_message("bad v4".into()),
        );

        let err = AppError::from(errors);
        assert!(matches!(err, AppError::Validation { ref message } if message == "bad v4"));
    }

    #[test]
    fn test_from_domain_parse_error() {
        let err = AppError::from(DomainParseError::UnknownSuffix("co.uk".into()));
        assert_eq!(err.to_string(), "Invalid domain: co.uk");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = AppError::from(DomainParseError::Empty);
        assert_eq!(err.to_string(), "Missing required parameter: domain");
    }
}
