//! Domain layer containing the DNS update model and the provider contract.
//!
//! This module is independent of HTTP framing and of any particular provider
//! API. Concrete providers live in [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Record, domain name, credential and update types
//! - [`provider`] - The [`provider::DnsProvider`] trait and its error type
//!
//! # Update Flow
//!
//! 1. The HTTP handler turns query parameters into an [`entities::UpdateRequest`]
//! 2. [`crate::application::services::RecordService`] retrieves existing records
//! 3. Each [`entities::RecordTarget`] is matched against them and dispatched as
//!    a create or an edit through the [`provider::DnsProvider`]
//! 4. One [`entities::OperationResult`] is produced per target

pub mod entities;
pub mod provider;
