//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`porkbun`] - Porkbun API client implementing [`crate::domain::provider::DnsProvider`]

pub mod porkbun;
