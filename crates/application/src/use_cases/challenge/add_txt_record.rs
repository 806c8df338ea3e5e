use cloudns_dns01_domain::{DomainError, ZoneHost, TXT_RECORD_TYPE};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::ZoneResolver;

pub struct AddTxtRecordUseCase {
    zone_resolver: Arc<ZoneResolver>,
}

impl AddTxtRecordUseCase {
    pub fn new(zone_resolver: Arc<ZoneResolver>) -> Self {
        Self { zone_resolver }
    }

    /// Creates the TXT record. Every failure propagates: the challenge
    /// cannot be satisfied without it.
    #[instrument(skip(self, content))]
    pub async fn execute(
        &self,
        domain: &str,
        record_name: &str,
        content: &str,
        ttl: u32,
    ) -> Result<ZoneHost, DomainError> {
        let zone_host = self.zone_resolver.find_zone_and_host(record_name).await?;

        info!(
            zone = %zone_host.zone,
            host = %zone_host.host,
            domain = %domain,
            "Adding TXT record"
        );

        self.zone_resolver
            .api()
            .create_record(
                self.zone_resolver.credentials(),
                &zone_host.zone,
                &zone_host.host,
                TXT_RECORD_TYPE,
                content,
                ttl,
            )
            .await?;

        info!(record = %zone_host.fqdn(), ttl, "TXT record added");
        Ok(zone_host)
    }
}
