//! cloudns-dns01 Domain Layer
pub mod config;
pub mod credentials;
pub mod dns_name;
pub mod errors;
pub mod nameserver;
pub mod txt_record;

pub use config::{CliOverrides, Config, ConfigError};
pub use credentials::{AuthIdentity, AuthParams, Credentials, RawCredentials};
pub use dns_name::{challenge_record_name, zone_candidates};
pub use errors::DomainError;
pub use nameserver::Nameserver;
pub use txt_record::{TxtRecord, ZoneHost, TXT_RECORD_TYPE};
