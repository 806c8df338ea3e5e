use cloudns_dns01_domain::dns_name::{is_valid_domain_name, normalize_name, relative_host};
use cloudns_dns01_domain::{zone_candidates, Credentials, DomainError, ZoneHost};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::DnsProviderApi;

/// Finds the account zone that owns a record name.
///
/// Bound to one credential set, so its per-record-name cache never mixes
/// answers from different accounts.
pub struct ZoneResolver {
    api: Arc<dyn DnsProviderApi>,
    credentials: Arc<Credentials>,
    cache: DashMap<String, ZoneHost>,
}

impl ZoneResolver {
    pub fn new(api: Arc<dyn DnsProviderApi>, credentials: Arc<Credentials>) -> Self {
        Self {
            api,
            credentials,
            cache: DashMap::new(),
        }
    }

    pub fn api(&self) -> &Arc<dyn DnsProviderApi> {
        &self.api
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Splits `record_name` into (zone, host) by probing progressively
    /// shorter suffixes until the provider confirms one as a zone.
    #[instrument(skip(self))]
    pub async fn find_zone_and_host(&self, record_name: &str) -> Result<ZoneHost, DomainError> {
        let record_name = normalize_name(record_name);
        let key = record_name.to_ascii_lowercase();

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.value().clone());
        }

        let candidates = zone_candidates(record_name);

        for zone in candidates.iter().filter(|c| is_valid_domain_name(c)) {
            debug!(zone = %zone, "Looking up zone");

            match self.api.get_zone(&self.credentials, zone).await {
                Ok(()) => {
                    let Some(host) = relative_host(record_name, zone) else {
                        continue;
                    };
                    debug!(zone = %zone, record_name = %record_name, "Found zone for record");
                    let zone_host = ZoneHost::new(zone.as_str(), host);
                    self.cache.insert(key, zone_host.clone());
                    return Ok(zone_host);
                }
                Err(e) if e.is_api_error() => {
                    debug!(zone = %zone, error = %e, "Zone not found");
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::ZoneNotFound {
            record_name: record_name.to_string(),
            candidates,
        })
    }
}
