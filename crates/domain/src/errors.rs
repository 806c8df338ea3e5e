use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "Unable to find zone for {record_name} using zone names: {}. \
         Please confirm that the domain name has been entered correctly \
         and is already associated with the supplied ClouDNS account.",
        candidates.join(", ")
    )]
    ZoneNotFound {
        record_name: String,
        candidates: Vec<String>,
    },

    #[error("Name {name} has multiple CNAME records set: {}", targets.join(", "))]
    MultipleCnameRecords { name: String, targets: Vec<String> },

    #[error("CNAME loop detected while resolving {name}: {}", chain.join(" -> "))]
    CnameLoop { name: String, chain: Vec<String> },

    #[error("Delegation too deep while resolving {name}: more than {max_depth} CNAME hops")]
    DelegationTooDeep { name: String, max_depth: usize },

    #[error("DNS lookup failed for {name}: {message}")]
    DnsLookup { name: String, message: String },

    #[error("Error communicating with the ClouDNS API: {0}")]
    Communication(String),

    #[error("Error communicating with the ClouDNS API: {body}")]
    Api { body: String },
}

impl DomainError {
    /// Provider answered, but with a failure status or error flag.
    pub fn is_api_error(&self) -> bool {
        matches!(self, DomainError::Api { .. })
    }
}
