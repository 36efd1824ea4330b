//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RecordService;

/// State shared by all request handlers.
///
/// Holds only read-only, construction-time objects; nothing request-specific
/// is ever stored here.
#[derive(Clone)]
pub struct AppState {
    pub record_service: Arc<RecordService>,
}

impl AppState {
    pub fn new(record_service: Arc<RecordService>) -> Self {
        Self { record_service }
    }
}
