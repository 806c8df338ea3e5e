use cloudns_dns01_domain::{DomainError, ZoneHost, TXT_RECORD_TYPE};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::services::ZoneResolver;

/// What a best-effort cleanup ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Deleted { record_id: String },
    NotFound,
    ZoneUnresolved,
    Failed,
}

pub struct RemoveTxtRecordUseCase {
    zone_resolver: Arc<ZoneResolver>,
}

impl RemoveTxtRecordUseCase {
    pub fn new(zone_resolver: Arc<ZoneResolver>) -> Self {
        Self { zone_resolver }
    }

    /// Deletes the TXT record at `record_name` whose content is exactly
    /// `content`, leaving sibling records from concurrent challenges alone.
    ///
    /// Never fails; problems are logged.
    #[instrument(skip(self, content))]
    pub async fn execute(&self, domain: &str, record_name: &str, content: &str) -> CleanupOutcome {
        let zone_host = match self.zone_resolver.find_zone_and_host(record_name).await {
            Ok(zone_host) => zone_host,
            Err(e) => {
                warn!(
                    record_name = %record_name,
                    error = %e,
                    "Encountered error finding zone during deletion"
                );
                return CleanupOutcome::ZoneUnresolved;
            }
        };

        let record_id = match self.find_txt_record_id(&zone_host, content).await {
            Ok(Some(record_id)) => record_id,
            Ok(None) => {
                debug!(record = %zone_host.fqdn(), "TXT record not found; no cleanup needed");
                return CleanupOutcome::NotFound;
            }
            Err(e) => {
                warn!(
                    record = %zone_host.fqdn(),
                    error = %e,
                    "Encountered error listing TXT records"
                );
                return CleanupOutcome::Failed;
            }
        };

        match self
            .zone_resolver
            .api()
            .delete_record(self.zone_resolver.credentials(), &zone_host.zone, &record_id)
            .await
        {
            Ok(()) => {
                info!(
                    zone = %zone_host.zone,
                    record_id = %record_id,
                    domain = %domain,
                    "TXT record deleted"
                );
                CleanupOutcome::Deleted { record_id }
            }
            Err(e) => {
                warn!(
                    zone = %zone_host.zone,
                    record_id = %record_id,
                    error = %e,
                    "Encountered error deleting TXT record"
                );
                CleanupOutcome::Failed
            }
        }
    }

    async fn find_txt_record_id(
        &self,
        zone_host: &ZoneHost,
        content: &str,
    ) -> Result<Option<String>, DomainError> {
        let records = self
            .zone_resolver
            .api()
            .list_records(
                self.zone_resolver.credentials(),
                &zone_host.zone,
                &zone_host.host,
                TXT_RECORD_TYPE,
            )
            .await?;

        Ok(records
            .into_iter()
            .find(|(_, record)| record.content == content)
            .map(|(record_id, _)| record_id))
    }
}
