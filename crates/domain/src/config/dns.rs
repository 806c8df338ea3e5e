use serde::{Deserialize, Serialize};

use crate::nameserver::Nameserver;

/// CNAME delegation settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Nameserver used to resolve CNAME aliases, e.g. "1.1.1.1" or
    /// "9.9.9.9:53". Unset means the system resolver configuration.
    #[serde(default)]
    pub nameserver: Option<String>,

    /// Maximum number of CNAME hops to follow. Unset means no limit;
    /// loops are always detected.
    #[serde(default)]
    pub max_cname_depth: Option<usize>,
}

impl DnsConfig {
    pub fn nameserver(&self) -> Option<Nameserver> {
        self.nameserver.as_deref().and_then(|ns| ns.parse().ok())
    }
}
