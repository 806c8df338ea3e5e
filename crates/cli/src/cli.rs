use clap::{Args, Parser, Subcommand};
use cloudns_dns01_domain::{challenge_record_name, CliOverrides};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cloudns-dns01")]
#[command(version)]
#[command(about = "ACME dns-01 challenges through the ClouDNS API")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Path to the ClouDNS credentials file
    #[arg(long, global = true)]
    pub credentials: Option<PathBuf>,

    /// Seconds to wait for DNS propagation after publishing the record
    #[arg(long, global = true)]
    pub propagation_seconds: Option<u64>,

    /// Nameserver used to resolve CNAME aliases
    #[arg(long, global = true)]
    pub nameserver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish the validation TXT record
    Perform(ChallengeArgs),
    /// Remove the validation TXT record
    Cleanup(ChallengeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ChallengeArgs {
    /// Domain being validated
    #[arg(long, env = "CERTBOT_DOMAIN")]
    pub domain: String,

    /// Validation token to publish
    #[arg(long, env = "CERTBOT_VALIDATION")]
    pub validation: String,

    /// Validation record name (default: _acme-challenge.<domain>)
    #[arg(long)]
    pub record_name: Option<String>,
}

impl ChallengeArgs {
    pub fn validation_name(&self) -> String {
        self.record_name
            .clone()
            .unwrap_or_else(|| challenge_record_name(&self.domain))
    }
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            credentials: self.credentials.clone(),
            propagation_seconds: self.propagation_seconds,
            nameserver: self.nameserver.clone(),
            log_level: self.log_level.clone(),
        }
    }
}
