use cloudns_dns01_domain::dns_name::normalize_name;
use cloudns_dns01_domain::{DomainError, Nameserver};
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::CnameLookup;

/// Follows CNAME chains to the name that actually holds a record.
///
/// Results are memoized per (name, nameserver) for the lifetime of the
/// resolver.
pub struct AliasResolver {
    lookup: Arc<dyn CnameLookup>,
    max_depth: Option<usize>,
    cache: DashMap<(String, Option<Nameserver>), String>,
}

impl AliasResolver {
    pub fn new(lookup: Arc<dyn CnameLookup>) -> Self {
        Self {
            lookup,
            max_depth: None,
            cache: DashMap::new(),
        }
    }

    /// Fail with [`DomainError::DelegationTooDeep`] after `max_depth` hops.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Canonical name of `name`: the end of its CNAME chain.
    #[instrument(skip(self))]
    pub async fn resolve_alias(
        &self,
        name: &str,
        nameserver: Option<Nameserver>,
    ) -> Result<String, DomainError> {
        let origin = normalize_name(name).to_string();
        let key = (origin.to_ascii_lowercase(), nameserver);

        if let Some(cached) = self.cache.get(&key) {
            debug!(name = %origin, canonical = %cached.value(), "Alias resolved from cache");
            return Ok(cached.value().clone());
        }

        let mut current = origin.clone();
        let mut chain = vec![current.clone()];
        let mut seen = HashSet::from([key.0.clone()]);

        loop {
            let targets = self.lookup.cname_targets(&current, nameserver).await?;

            if targets.len() > 1 {
                return Err(DomainError::MultipleCnameRecords {
                    name: current,
                    targets,
                });
            }
            let Some(target) = targets.first().map(|t| normalize_name(t).to_string()) else {
                debug!(name = %current, "No CNAME record found");
                break;
            };

            debug!(name = %current, cname = %target, "CNAME points to target");
            chain.push(target.clone());

            if !seen.insert(target.to_ascii_lowercase()) {
                return Err(DomainError::CnameLoop {
                    name: origin,
                    chain,
                });
            }

            if let Some(max_depth) = self.max_depth {
                if chain.len() - 1 > max_depth {
                    return Err(DomainError::DelegationTooDeep {
                        name: origin,
                        max_depth,
                    });
                }
            }

            current = target;
        }

        self.cache.insert(key, current.clone());
        Ok(current)
    }
}
