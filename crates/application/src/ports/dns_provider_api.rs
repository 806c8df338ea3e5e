use async_trait::async_trait;
use cloudns_dns01_domain::{Credentials, DomainError, TxtRecord};
use std::collections::BTreeMap;

/// Record operations of the DNS provider's HTTP API.
///
/// Credentials are passed on every call; implementations keep no
/// authentication state of their own.
#[async_trait]
pub trait DnsProviderApi: Send + Sync {
    /// Succeeds iff `zone` exists and belongs to the authenticated account.
    ///
    /// A provider-side rejection surfaces as [`DomainError::Api`].
    async fn get_zone(&self, credentials: &Credentials, zone: &str) -> Result<(), DomainError>;

    /// Records of `record_type` at `host` in `zone`, keyed by provider record id.
    async fn list_records(
        &self,
        credentials: &Credentials,
        zone: &str,
        host: &str,
        record_type: &str,
    ) -> Result<BTreeMap<String, TxtRecord>, DomainError>;

    /// Creates a new record. Repeated calls may create duplicates.
    async fn create_record(
        &self,
        credentials: &Credentials,
        zone: &str,
        host: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
    ) -> Result<(), DomainError>;

    async fn delete_record(
        &self,
        credentials: &Credentials,
        zone: &str,
        record_id: &str,
    ) -> Result<(), DomainError>;
}
