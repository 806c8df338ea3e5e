pub mod cloudns;
pub mod config;
pub mod dns;

pub use cloudns::ClouDnsClient;
pub use config::load_credentials;
pub use dns::HickoryCnameLookup;
