//! DNS record reconciliation service.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::{
    DnsRecord, OperationResult, RecordAction, RecordPayload, RecordTarget, RecordType,
    UpdateRequest,
};
use crate::domain::provider::DnsProvider;
use crate::error::{AppError, RETRIEVE_FAILED_MESSAGE};

/// TTL applied to created and edited records when none is configured.
pub const DEFAULT_RECORD_TTL: u32 = 600;

/// Returns the id of the first record with the given type and name.
///
/// This is a plain linear scan: if the provider holds duplicates, the first
/// one in response order wins.
pub fn find_record_id<'a>(
    records: &'a [DnsRecord],
    record_type: RecordType,
    name: &str,
) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.matches(record_type, name))
        .map(|record| record.id.as_str())
}

/// Service that brings A/AAAA records in line with the caller's addresses.
///
/// Holds no per-request state; one instance serves all requests.
pub struct RecordService {
    provider: Arc<dyn DnsProvider>,
    ttl: u32,
}

impl RecordService {
    /// Creates a new record service.
    pub fn new(provider: Arc<dyn DnsProvider>, ttl: u32) -> Self {
        Self { provider, ttl }
    }

    /// Reconciles every target of `request` against the provider.
    ///
    /// Existing records are fetched once for the registrable domain. Each
    /// target is then matched by type and the caller's original name and
    /// dispatched as an edit (match found) or a create (no match). Targets
    /// are processed A before AAAA, and a failure on one does not stop the
    /// other.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the existing records cannot be
    /// retrieved. No create or edit call is made in that case.
    pub async fn update_records(
        &self,
        request: &UpdateRequest,
    ) -> Result<Vec<OperationResult>, AppError> {
        let domain = request.domain.registrable_domain();

        let records = match self
            .provider
            .retrieve_records(domain, &request.credentials)
            .await
        {
            Ok(records) => {
                metrics::counter!("ddns_record_retrievals_total", "outcome" => "success")
                    .increment(1);
                records
            }
            Err(e) => {
                metrics::counter!("ddns_record_retrievals_total", "outcome" => "failure")
                    .increment(1);
                error!(domain, error = %e, "Failed to retrieve DNS records");
                return Err(AppError::upstream(RETRIEVE_FAILED_MESSAGE));
            }
        };

        let mut results = Vec::with_capacity(request.targets.len());
        for target in &request.targets {
            results.push(self.apply_target(request, &records, target).await);
        }

        Ok(results)
    }

    /// Creates or edits the record for a single target.
    async fn apply_target(
        &self,
        request: &UpdateRequest,
        records: &[DnsRecord],
        target: &RecordTarget,
    ) -> OperationResult {
        let domain = request.domain.registrable_domain();
        let record_type = target.record_type;
        let payload = RecordPayload {
            name: request.domain.subdomain().to_string(),
            record_type,
            content: target.address.clone(),
            ttl: self.ttl,
        };

        let existing = find_record_id(records, record_type, request.domain.fqdn());
        let (action, outcome) = match existing {
            Some(record_id) => (
                RecordAction::Edit,
                self.provider
                    .edit_record(domain, record_id, &request.credentials, &payload)
                    .await,
            ),
            None => (
                RecordAction::Create,
                self.provider
                    .create_record(domain, &request.credentials, &payload)
                    .await,
            ),
        };

        match outcome {
            Ok(()) => {
                metrics::counter!(
                    "ddns_record_operations_total",
                    "type" => record_type.as_str(),
                    "action" => action.as_str(),
                    "outcome" => "success"
                )
                .increment(1);
                info!(
                    name = request.domain.fqdn(),
                    %record_type,
                    %action,
                    "DNS record {}",
                    if action == RecordAction::Edit { "updated" } else { "created" }
                );
                OperationResult::success(record_type, action)
            }
            Err(e) => {
                metrics::counter!(
                    "ddns_record_operations_total",
                    "type" => record_type.as_str(),
                    "action" => action.as_str(),
                    "outcome" => "failure"
                )
                .increment(1);
                error!(
                    domain,
                    name = request.domain.fqdn(),
                    record_id = existing,
                    %record_type,
                    %action,
                    error = %e,
                    "DNS record operation failed"
                );
                OperationResult::failure(record_type, action)
            }
        }
    }
}
