//! Handler for the dynamic DNS update endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::update_record::{UpdateRecordQuery, UpdateRecordResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Points the caller's A and/or AAAA record at the supplied addresses.
///
/// # Endpoint
///
/// `GET /update-dns-record`
///
/// # Query Parameters
///
/// - `apiKey`, `secretKey` - provider credentials, forwarded as-is
/// - `domain` - fully-qualified name to update, e.g. `home.example.co.uk`
/// - `ipv4address` / `ipv6address` - at least one is required
///
/// # Response
///
/// ```json
/// {
///   "responses": [
///     { "type": "A", "action": "edit", "success": true, "message": "A record updated successfully" },
///     { "type": "AAAA", "action": "create", "success": false, "message": "Failed to create AAAA record" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 `{"error": ...}` with a parameter-specific message on invalid input
/// - 500 `{"error": "Failed to retrieve DNS records"}` if existing records
///   cannot be fetched
///
/// Individual create/edit failures do not fail the request.
pub async fn update_record_handler(
    State(state): State<AppState>,
    query: Result<Query<UpdateRecordQuery>, QueryRejection>,
) -> Result<Json<UpdateRecordResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let request = query.into_update_request().inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected DNS update request");
    })?;

    let responses = state.record_service.update_records(&request).await?;

    Ok(Json(UpdateRecordResponse { responses }))
}
