//! API route configuration.

use crate::api::handlers::update_record_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Path of the single update endpoint.
pub const UPDATE_DNS_RECORD_PATH: &str = "/update-dns-record";

/// All API routes.
///
/// # Endpoints
///
/// - `GET /update-dns-record` - Create or update A/AAAA records for a domain
pub fn routes() -> Router<AppState> {
    Router::new().route(UPDATE_DNS_RECORD_PATH, get(update_record_handler))
}
