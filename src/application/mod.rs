//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::provider::DnsProvider`] trait and
//! expose a small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::record_service::RecordService`] - A/AAAA record reconciliation

pub mod services;
