//! Validated update requests and their per-record outcomes.

use serde::Serialize;
use std::fmt;

use super::{Credentials, DomainName, RecordType};

/// One record to reconcile: a type and the address it should point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTarget {
    pub record_type: RecordType,
    pub address: String,
}

impl RecordTarget {
    pub fn new(record_type: RecordType, address: impl Into<String>) -> Self {
        Self {
            record_type,
            address: address.into(),
        }
    }
}

/// A fully validated update for one domain.
///
/// `targets` holds at most one entry per record type, A before AAAA.
#[derive(Debug)]
pub struct UpdateRequest {
    pub domain: DomainName,
    pub credentials: Credentials,
    pub targets: Vec<RecordTarget>,
}

impl UpdateRequest {
    /// Builds a request from whichever addresses were supplied.
    ///
    /// The resulting targets are ordered A then AAAA so responses are stable.
    pub fn new(
        domain: DomainName,
        credentials: Credentials,
        ipv4: Option<String>,
        ipv6: Option<String>,
    ) -> Self {
        let targets = [(RecordType::A, ipv4), (RecordType::Aaaa, ipv6)]
            .into_iter()
            .filter_map(|(record_type, address)| {
                address.map(|address| RecordTarget::new(record_type, address))
            })
            .collect();

        Self {
            domain,
            credentials,
            targets,
        }
    }
}

/// Whether a record was created or an existing one was edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    Create,
    Edit,
}

impl RecordAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Edit => "updated",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "update",
        }
    }
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single create or edit call.
///
/// Failures are reported as data inside a successful response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub action: RecordAction,
    pub success: bool,
    pub message: String,
}

impl OperationResult {
    pub fn success(record_type: RecordType, action: RecordAction) -> Self {
        Self {
            record_type,
            action,
            success: true,
            message: format!("{record_type} record {} successfully", action.past_tense()),
        }
    }

    pub fn failure(record_type: RecordType, action: RecordAction) -> Self {
        Self {
            record_type,
            action,
            success: false,
            message: format!("Failed to {} {record_type} record", action.verb()),
        }
    }
}
