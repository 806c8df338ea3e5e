//! # cloudns-dns01
//!
//! certbot manual hook that answers dns-01 challenges through ClouDNS.

mod bootstrap;
mod cli;
mod di;

use anyhow::Context;
use clap::Parser;
use cloudns_dns01_application::ports::ChallengeHandler;
use cloudns_dns01_infrastructure::load_credentials;
use std::time::Duration;
use tracing::info;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        api = %config.api.base_url,
        nameserver = config.dns.nameserver.as_deref().unwrap_or("system"),
        propagation_seconds = config.challenge.propagation_seconds,
        "Configuration loaded"
    );

    let credentials_path = config
        .challenge
        .credentials
        .as_deref()
        .context("credentials file not configured")?;
    let credentials = load_credentials(credentials_path)?;

    let authenticator = di::build_authenticator(&config, credentials)?;

    match cli.command {
        Command::Perform(args) => {
            let validation_name = args.validation_name();
            authenticator
                .perform(&args.domain, &validation_name, &args.validation)
                .await?;

            info!(
                record_name = %validation_name,
                seconds = config.challenge.propagation_seconds,
                "Waiting for DNS propagation"
            );
            tokio::time::sleep(Duration::from_secs(config.challenge.propagation_seconds)).await;
        }
        Command::Cleanup(args) => {
            let validation_name = args.validation_name();
            let outcome = authenticator
                .cleanup_with_outcome(&args.domain, &validation_name, &args.validation)
                .await;
            info!(record_name = %validation_name, outcome = ?outcome, "Cleanup finished");
        }
    }

    Ok(())
}
