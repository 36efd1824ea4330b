//! Core domain entities for DNS reconciliation.
//!
//! # Entity Types
//!
//! - [`DnsRecord`] - A record as stored by the provider
//! - [`RecordPayload`] - The record fields sent on create/edit
//! - [`DomainName`] - A caller-supplied name split on the public suffix list
//! - [`Credentials`] - Provider API key pair, redacted in `Debug`
//! - [`UpdateRequest`] / [`RecordTarget`] - A validated update
//! - [`OperationResult`] - Outcome of one create/edit

pub mod credentials;
pub mod dns_record;
pub mod domain_name;
pub mod update;

pub use credentials::Credentials;
pub use dns_record::{DnsRecord, RecordPayload, RecordType};
pub use domain_name::{DomainName, DomainParseError};
pub use update::{OperationResult, RecordAction, RecordTarget, UpdateRequest};
