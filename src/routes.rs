//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /update-dns-record` - Dynamic DNS update (credentials in query)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging without query strings
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and per-request middleware, without path normalization.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Path normalization wraps the router so it runs before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
