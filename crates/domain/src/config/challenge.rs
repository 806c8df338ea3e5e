use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// dns-01 challenge settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChallengeConfig {
    /// Path to the ClouDNS credentials file
    #[serde(default)]
    pub credentials: Option<PathBuf>,

    /// Seconds to wait for DNS to propagate before the CA verifies
    /// the record (default: 60)
    #[serde(default = "default_propagation_seconds")]
    pub propagation_seconds: u64,

    /// TTL of the validation TXT record in seconds (default: 60)
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            propagation_seconds: default_propagation_seconds(),
            ttl: default_ttl(),
        }
    }
}

fn default_propagation_seconds() -> u64 {
    60
}

fn default_ttl() -> u32 {
    60
}
