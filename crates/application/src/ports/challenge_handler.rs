use async_trait::async_trait;
use cloudns_dns01_domain::DomainError;

/// Entry points an ACME client host calls for each dns-01 challenge.
#[async_trait]
pub trait ChallengeHandler: Send + Sync {
    /// Publishes `validation` at `validation_name`. Failures are fatal.
    async fn perform(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<(), DomainError>;

    /// Removes the record published by `perform`. Never fails.
    async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str);
}
