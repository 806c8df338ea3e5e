mod challenge_handler;
mod cname_lookup;
mod dns_provider_api;

pub use challenge_handler::ChallengeHandler;
pub use cname_lookup::CnameLookup;
pub use dns_provider_api::DnsProviderApi;
