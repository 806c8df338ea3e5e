use async_trait::async_trait;
use cloudns_dns01_application::ports::CnameLookup;
use cloudns_dns01_domain::dns_name::normalize_name;
use cloudns_dns01_domain::{DomainError, Nameserver};
use dashmap::DashMap;
use hickory_resolver::config::{NameServerConfig, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::{Resolver, TokioResolver};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// CNAME queries through hickory-resolver.
///
/// One resolver is built per nameserver and reused for later queries.
pub struct HickoryCnameLookup {
    resolvers: DashMap<Option<Nameserver>, TokioResolver>,
    timeout: Duration,
}

impl HickoryCnameLookup {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            resolvers: DashMap::new(),
            timeout,
        }
    }

    fn resolver_for(&self, nameserver: Option<Nameserver>) -> TokioResolver {
        self.resolvers
            .entry(nameserver)
            .or_insert_with(|| self.build_resolver(nameserver))
            .clone()
    }

    fn build_resolver(&self, nameserver: Option<Nameserver>) -> TokioResolver {
        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout;
        opts.attempts = 3;

        let builder = match nameserver {
            Some(ns) => {
                let addr = ns.socket_addr();
                let mut config = ResolverConfig::new();
                config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));
                config.add_name_server(NameServerConfig::new(addr, Protocol::Tcp));
                debug!(nameserver = %ns, "Using nameserver");
                Resolver::builder_with_config(config, TokioConnectionProvider::default())
            }
            None => Resolver::builder_tokio().unwrap_or_else(|e| {
                debug!(error = %e, "System resolver configuration unavailable, using defaults");
                Resolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
            }),
        };

        builder.with_options(opts).build()
    }
}

impl Default for HickoryCnameLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CnameLookup for HickoryCnameLookup {
    async fn cname_targets(
        &self,
        name: &str,
        nameserver: Option<Nameserver>,
    ) -> Result<Vec<String>, DomainError> {
        let query = Name::from_str(&format!("{}.", normalize_name(name))).map_err(|e| {
            DomainError::InvalidDomainName(format!("{name}: {e}"))
        })?;

        let resolver = self.resolver_for(nameserver);

        match resolver.lookup(query.clone(), RecordType::CNAME).await {
            Ok(lookup) => Ok(lookup
                .record_iter()
                .filter(|record| record.name() == &query)
                .filter_map(|record| match record.data() {
                    RData::CNAME(cname) => Some(normalize_name(&cname.0.to_ascii()).to_string()),
                    _ => None,
                })
                .collect()),
            Err(e) if e.is_no_records_found() || e.is_nx_domain() => {
                debug!(name = %name, "No CNAME data");
                Ok(Vec::new())
            }
            Err(e) => Err(DomainError::DnsLookup {
                name: name.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
