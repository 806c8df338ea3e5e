use async_trait::async_trait;
use cloudns_dns01_domain::{DomainError, Nameserver};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{AddTxtRecordUseCase, CleanupOutcome, RemoveTxtRecordUseCase};
use crate::ports::ChallengeHandler;
use crate::services::AliasResolver;

/// Recommended TTL for challenge records (60 seconds)
pub const DEFAULT_CHALLENGE_TTL: u32 = 60;

/// dns-01 challenge handler with CNAME delegation support.
///
/// The validation name is resolved through its CNAME chain first, so the
/// TXT record lands in whichever zone the chain ends in.
pub struct Dns01Authenticator {
    alias_resolver: Arc<AliasResolver>,
    add_record: AddTxtRecordUseCase,
    remove_record: RemoveTxtRecordUseCase,
    nameserver: Option<Nameserver>,
    ttl: u32,
}

impl Dns01Authenticator {
    pub fn new(
        alias_resolver: Arc<AliasResolver>,
        add_record: AddTxtRecordUseCase,
        remove_record: RemoveTxtRecordUseCase,
    ) -> Self {
        Self {
            alias_resolver,
            add_record,
            remove_record,
            nameserver: None,
            ttl: DEFAULT_CHALLENGE_TTL,
        }
    }

    pub fn with_nameserver(mut self, nameserver: Option<Nameserver>) -> Self {
        self.nameserver = nameserver;
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Same as [`ChallengeHandler::cleanup`], reporting what happened.
    #[instrument(skip(self, validation))]
    pub async fn cleanup_with_outcome(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> CleanupOutcome {
        let record_name = match self
            .alias_resolver
            .resolve_alias(validation_name, self.nameserver)
            .await
        {
            Ok(record_name) => record_name,
            Err(e) => {
                warn!(error = %e, "Unable to resolve validation name; skipping cleanup");
                return CleanupOutcome::ZoneUnresolved;
            }
        };

        self.remove_record
            .execute(domain, &record_name, validation)
            .await
    }
}

#[async_trait]
impl ChallengeHandler for Dns01Authenticator {
    #[instrument(skip(self, validation))]
    async fn perform(
        &self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> Result<(), DomainError> {
        let record_name = self
            .alias_resolver
            .resolve_alias(validation_name, self.nameserver)
            .await?;

        if record_name != validation_name {
            debug!(target_name = %record_name, "Validation name is delegated");
        }

        self.add_record
            .execute(domain, &record_name, validation, self.ttl)
            .await?;
        Ok(())
    }

    async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str) {
        self.cleanup_with_outcome(domain, validation_name, validation)
            .await;
    }
}
