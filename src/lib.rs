//! # Porkbun DDNS
//!
//! A small dynamic DNS endpoint built with Axum. Routers and scripts call a
//! single URL with their current addresses, and the service creates or edits
//! the matching A/AAAA records at Porkbun.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, domain names, credentials and the provider trait
//! - **Application Layer** ([`application`]) - Create-or-edit reconciliation
//! - **Infrastructure Layer** ([`infrastructure`]) - Porkbun HTTP client with retries
//! - **API Layer** ([`api`]) - Query DTOs, the update handler and tracing middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl "http://localhost:8000/update-dns-record?apiKey=pk1_...&secretKey=sk1_...&domain=home.example.com&ipv4address=203.0.113.7"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RecordService;
    pub use crate::domain::entities::{
        Credentials, DnsRecord, DomainName, OperationResult, RecordAction, RecordType,
        UpdateRequest,
    };
    pub use crate::domain::provider::{DnsProvider, ProviderError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::porkbun::{PorkbunClient, RetryPolicy};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
