use cloudns_dns01_application::services::{AliasResolver, ZoneResolver};
use cloudns_dns01_application::use_cases::{
    AddTxtRecordUseCase, Dns01Authenticator, RemoveTxtRecordUseCase,
};
use cloudns_dns01_domain::{Config, Credentials};
use cloudns_dns01_infrastructure::{ClouDnsClient, HickoryCnameLookup};
use std::sync::Arc;

/// Wires the ClouDNS client and DNS lookups into a challenge handler.
pub fn build_authenticator(
    config: &Config,
    credentials: Credentials,
) -> anyhow::Result<Dns01Authenticator> {
    let client = Arc::new(ClouDnsClient::new(&config.api)?);
    let zone_resolver = Arc::new(ZoneResolver::new(client, Arc::new(credentials)));

    let alias_resolver = Arc::new(
        AliasResolver::new(Arc::new(HickoryCnameLookup::new()))
            .with_max_depth(config.dns.max_cname_depth),
    );

    Ok(Dns01Authenticator::new(
        alias_resolver,
        AddTxtRecordUseCase::new(zone_resolver.clone()),
        RemoveTxtRecordUseCase::new(zone_resolver),
    )
    .with_nameserver(config.dns.nameserver())
    .with_ttl(config.challenge.ttl))
}
