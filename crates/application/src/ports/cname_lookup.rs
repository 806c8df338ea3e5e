use async_trait::async_trait;
use cloudns_dns01_domain::{DomainError, Nameserver};

/// One CNAME query step.
#[async_trait]
pub trait CnameLookup: Send + Sync {
    /// CNAME targets of `name`.
    ///
    /// Returns an empty list when the name has no CNAME record or does
    /// not exist at all. `None` for `nameserver` selects the system
    /// resolver configuration.
    async fn cname_targets(
        &self,
        name: &str,
        nameserver: Option<Nameserver>,
    ) -> Result<Vec<String>, DomainError>;
}
