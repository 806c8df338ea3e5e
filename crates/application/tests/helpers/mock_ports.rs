#![allow(dead_code)]

use async_trait::async_trait;
use cloudns_dns01_application::ports::{CnameLookup, DnsProviderApi};
use cloudns_dns01_domain::{AuthIdentity, Credentials, DomainError, Nameserver, TxtRecord};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn account_credentials() -> Arc<Credentials> {
    Arc::new(Credentials::new(AuthIdentity::AuthId("1234".to_string()), "pw").unwrap())
}

// ============================================================================
// Mock DnsProviderApi
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub zone: String,
    pub id: String,
    pub host: String,
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
}

#[derive(Default)]
pub struct MockDnsProviderApi {
    zones: HashSet<String>,
    records: RwLock<Vec<StoredRecord>>,
    record_counter: AtomicU64,
    zone_lookups: RwLock<Vec<String>>,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    identities_seen: RwLock<Vec<String>>,
    unreachable: bool,
    fail_on_create: bool,
    fail_on_list: bool,
    fail_on_delete: bool,
}

impl MockDnsProviderApi {
    pub fn with_zones(zones: Vec<&str>) -> Self {
        Self {
            zones: zones.into_iter().map(str::to_string).collect(),
            record_counter: AtomicU64::new(1),
            ..Default::default()
        }
    }

    /// Every call fails as if the API could not be reached
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn with_failure_on_create(mut self) -> Self {
        self.fail_on_create = true;
        self
    }

    pub fn with_failure_on_list(mut self) -> Self {
        self.fail_on_list = true;
        self
    }

    pub fn with_failure_on_delete(mut self) -> Self {
        self.fail_on_delete = true;
        self
    }

    /// Pre-populates a record, as another concurrent challenge would
    pub async fn seed_record(&self, zone: &str, host: &str, content: &str) -> String {
        let id = self.next_id();
        self.records.write().await.push(StoredRecord {
            zone: zone.to_string(),
            id: id.clone(),
            host: host.to_string(),
            record_type: "TXT".to_string(),
            content: content.to_string(),
            ttl: 60,
        });
        id
    }

    pub async fn records(&self) -> Vec<StoredRecord> {
        self.records.read().await.clone()
    }

    pub async fn zone_lookups(&self) -> Vec<String> {
        self.zone_lookups.read().await.clone()
    }

    pub async fn identities_seen(&self) -> Vec<String> {
        self.identities_seen.read().await.clone()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> String {
        self.record_counter.fetch_add(1, Ordering::SeqCst).to_string()
    }

    async fn check(&self, credentials: &Credentials) -> Result<(), DomainError> {
        self.identities_seen
            .write()
            .await
            .push(format!("{:?}", credentials.identity()));
        if self.unreachable {
            return Err(DomainError::Communication("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DnsProviderApi for MockDnsProviderApi {
    async fn get_zone(&self, credentials: &Credentials, zone: &str) -> Result<(), DomainError> {
        self.check(credentials).await?;
        self.zone_lookups.write().await.push(zone.to_string());

        if self.zones.contains(zone) {
            Ok(())
        } else {
            Err(DomainError::Api {
                body: r#"{"status":"Failed","statusDescription":"Missing domain-name"}"#
                    .to_string(),
            })
        }
    }

    async fn list_records(
        &self,
        credentials: &Credentials,
        zone: &str,
        host: &str,
        record_type: &str,
    ) -> Result<BTreeMap<String, TxtRecord>, DomainError> {
        self.check(credentials).await?;
        if self.fail_on_list {
            return Err(DomainError::Api {
                body: "list failed".to_string(),
            });
        }

        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.zone == zone && r.host == host && r.record_type == record_type)
            .map(|r| {
                (
                    r.id.clone(),
                    TxtRecord {
                        id: r.id.clone(),
                        host: r.host.clone(),
                        content: r.content.clone(),
                        ttl: Some(r.ttl),
                    },
                )
            })
            .collect())
    }

    async fn create_record(
        &self,
        credentials: &Credentials,
        zone: &str,
        host: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
    ) -> Result<(), DomainError> {
        self.check(credentials).await?;
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_create {
            return Err(DomainError::Api {
                body: "create failed".to_string(),
            });
        }

        let id = self.next_id();
        self.records.write().await.push(StoredRecord {
            zone: zone.to_string(),
            id,
            host: host.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ttl,
        });
        Ok(())
    }

    async fn delete_record(
        &self,
        credentials: &Credentials,
        zone: &str,
        record_id: &str,
    ) -> Result<(), DomainError> {
        self.check(credentials).await?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_delete {
            return Err(DomainError::Api {
                body: "delete failed".to_string(),
            });
        }

        self.records
            .write()
            .await
            .retain(|r| !(r.zone == zone && r.id == record_id));
        Ok(())
    }
}

// ============================================================================
// Mock CnameLookup
// ============================================================================

#[derive(Default)]
pub struct MockCnameLookup {
    cnames: HashMap<String, Vec<String>>,
    queries: RwLock<Vec<(String, Option<Nameserver>)>>,
    should_fail: bool,
}

impl MockCnameLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cname(mut self, name: &str, target: &str) -> Self {
        self.cnames
            .entry(name.to_string())
            .or_default()
            .push(target.to_string());
        self
    }

    pub fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub async fn queries(&self) -> Vec<(String, Option<Nameserver>)> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl CnameLookup for MockCnameLookup {
    async fn cname_targets(
        &self,
        name: &str,
        nameserver: Option<Nameserver>,
    ) -> Result<Vec<String>, DomainError> {
        self.queries
            .write()
            .await
            .push((name.to_string(), nameserver));

        if self.should_fail {
            return Err(DomainError::DnsLookup {
                name: name.to_string(),
                message: "timed out".to_string(),
            });
        }

        Ok(self.cnames.get(name).cloned().unwrap_or_default())
    }
}
