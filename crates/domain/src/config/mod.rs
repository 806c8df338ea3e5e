//! Configuration module for cloudns-dns01
//!
//! - `root`: Main configuration and CLI overrides
//! - `api`: ClouDNS API endpoint and transport timeouts
//! - `dns`: CNAME resolution settings
//! - `challenge`: Credentials, record TTL and propagation wait
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod api;
pub mod challenge;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;

pub use api::ApiConfig;
pub use challenge::ChallengeConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
