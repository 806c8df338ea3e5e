use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ApiConfig, ChallengeConfig, ConfigError, DnsConfig, LoggingConfig};
use crate::nameserver::Nameserver;

/// Main configuration, loaded from an optional TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub challenge: ChallengeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub credentials: Option<PathBuf>,
    pub propagation_seconds: Option<u64>,
    pub nameserver: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path` (defaults when `None`), then apply
    /// CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(credentials) = overrides.credentials {
            self.challenge.credentials = Some(credentials);
        }
        if let Some(seconds) = overrides.propagation_seconds {
            self.challenge.propagation_seconds = seconds;
        }
        if let Some(nameserver) = overrides.nameserver {
            self.dns.nameserver = Some(nameserver);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.challenge.credentials.is_none() {
            return Err(ConfigError::Validation(
                "a ClouDNS credentials file is required (--credentials or challenge.credentials)"
                    .to_string(),
            ));
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of trace, debug, info, warn, error; got '{}'",
                self.logging.level
            )));
        }

        if self.challenge.ttl == 0 {
            return Err(ConfigError::Validation(
                "challenge.ttl must be greater than zero".to_string(),
            ));
        }

        if let Some(ns) = &self.dns.nameserver {
            ns.parse::<Nameserver>()
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        if self.dns.max_cname_depth == Some(0) {
            return Err(ConfigError::Validation(
                "dns.max_cname_depth must be greater than zero when set".to_string(),
            ));
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api timeouts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
