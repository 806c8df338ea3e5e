use serde::{Deserialize, Serialize};

/// ClouDNS API endpoint and transport settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API base URL (default: "https://api.cloudns.net")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds (default: 45)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.cloudns.net".to_string()
}

fn default_timeout_secs() -> u64 {
    45
}

fn default_connect_timeout_secs() -> u64 {
    10
}
