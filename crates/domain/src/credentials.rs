use serde::Deserialize;
use std::fmt;

use crate::errors::DomainError;

/// ClouDNS parameter names, in the order they are reported to the user.
pub const IDENTITY_PARAMS: [&str; 3] = ["auth-id", "sub-auth-id", "sub-auth-user"];
pub const PASSWORD_PARAM: &str = "auth-password";

/// The one identity a ClouDNS API user authenticates with.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum AuthIdentity {
    /// Main account user ID (`auth-id`)
    AuthId(String),
    /// Sub-user ID (`sub-auth-id`)
    SubAuthId(String),
    /// Sub-user name (`sub-auth-user`)
    SubAuthUser(String),
}

impl AuthIdentity {
    pub fn param_name(&self) -> &'static str {
        match self {
            AuthIdentity::AuthId(_) => IDENTITY_PARAMS[0],
            AuthIdentity::SubAuthId(_) => IDENTITY_PARAMS[1],
            AuthIdentity::SubAuthUser(_) => IDENTITY_PARAMS[2],
        }
    }

    pub fn value(&self) -> &str {
        match self {
            AuthIdentity::AuthId(v) | AuthIdentity::SubAuthId(v) | AuthIdentity::SubAuthUser(v) => v,
        }
    }
}

impl fmt::Debug for AuthIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.param_name(), self.value())
    }
}

/// Validated API credentials: exactly one identity plus the API password.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    identity: AuthIdentity,
    password: String,
}

impl Credentials {
    pub fn new(identity: AuthIdentity, password: impl Into<String>) -> Result<Self, DomainError> {
        let password = password.into();
        if identity.value().trim().is_empty() {
            return Err(DomainError::InvalidCredentials(format!(
                "{} cannot be empty",
                identity.param_name()
            )));
        }
        if password.is_empty() {
            return Err(DomainError::InvalidCredentials(format!(
                "{PASSWORD_PARAM} cannot be empty"
            )));
        }
        Ok(Self { identity, password })
    }

    pub fn identity(&self) -> &AuthIdentity {
        &self.identity
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Request parameters that authenticate a single API call.
    pub fn auth_params(&self) -> AuthParams<'_> {
        AuthParams {
            pairs: [
                (self.identity.param_name(), self.identity.value()),
                (PASSWORD_PARAM, self.password.as_str()),
            ],
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Borrowed parameter bundle injected into every outgoing request.
#[derive(Clone, Copy)]
pub struct AuthParams<'a> {
    pairs: [(&'static str, &'a str); 2],
}

impl<'a> AuthParams<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }
}

impl fmt::Debug for AuthParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entry(&self.pairs[0].0, &self.pairs[0].1)
            .entry(&self.pairs[1].0, &"<redacted>")
            .finish()
    }
}

/// IDs may be written as TOML integers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum CredentialValue {
    Text(String),
    Number(i64),
}

impl CredentialValue {
    fn into_non_empty(self) -> Option<String> {
        let value = match self {
            CredentialValue::Text(s) => s.trim().to_string(),
            CredentialValue::Number(n) => n.to_string(),
        };
        (!value.is_empty()).then_some(value)
    }
}

/// Credentials file contents before the exactly-one-identity check.
///
/// Accepts the ClouDNS parameter names (`auth-id = "1234"`) as well as the
/// certbot INI names (`dns_cloudns_auth_id = 1234`), quoted or not.
#[derive(Default, Deserialize)]
pub struct RawCredentials {
    #[serde(default, rename = "auth-id", alias = "dns_cloudns_auth_id")]
    auth_id: Option<CredentialValue>,

    #[serde(default, rename = "sub-auth-id", alias = "dns_cloudns_sub_auth_id")]
    sub_auth_id: Option<CredentialValue>,

    #[serde(default, rename = "sub-auth-user", alias = "dns_cloudns_sub_auth_user")]
    sub_auth_user: Option<CredentialValue>,

    #[serde(default, rename = "auth-password", alias = "dns_cloudns_auth_password")]
    auth_password: Option<CredentialValue>,
}

impl RawCredentials {
    /// Parses `content` as TOML, falling back to certbot's INI
    /// `key = value` form for files with unquoted string values.
    pub fn parse(content: &str, source: &str) -> Result<Self, DomainError> {
        Self::from_toml_str(content, source).or_else(|_| Self::from_ini_str(content, source))
    }

    pub fn from_toml_str(content: &str, source: &str) -> Result<Self, DomainError> {
        toml::from_str(content).map_err(|e| {
            DomainError::InvalidCredentials(format!(
                "Failed to parse credentials file {source}: {e}"
            ))
        })
    }

    /// One `key = value` per line. Blank lines, `#`/`;` comments and
    /// section headers are skipped, as are keys this plugin does not use.
    pub fn from_ini_str(content: &str, source: &str) -> Result<Self, DomainError> {
        let mut raw = Self::default();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with(';')
                || (line.starts_with('[') && line.ends_with(']'))
            {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(DomainError::InvalidCredentials(format!(
                    "Failed to parse credentials file {source}: line {}: expected key = value",
                    index + 1
                )));
            };

            let value = Some(CredentialValue::Text(unquote(value.trim()).to_string()));
            match key.trim() {
                "auth-id" | "dns_cloudns_auth_id" => raw.auth_id = value,
                "sub-auth-id" | "dns_cloudns_sub_auth_id" => raw.sub_auth_id = value,
                "sub-auth-user" | "dns_cloudns_sub_auth_user" => raw.sub_auth_user = value,
                "auth-password" | "dns_cloudns_auth_password" => raw.auth_password = value,
                _ => {}
            }
        }

        Ok(raw)
    }

    /// Enforces exactly one identity field plus a password.
    pub fn validate(self, source: &str) -> Result<Credentials, DomainError> {
        let mut identities: Vec<AuthIdentity> = [
            self.auth_id
                .and_then(CredentialValue::into_non_empty)
                .map(AuthIdentity::AuthId),
            self.sub_auth_id
                .and_then(CredentialValue::into_non_empty)
                .map(AuthIdentity::SubAuthId),
            self.sub_auth_user
                .and_then(CredentialValue::into_non_empty)
                .map(AuthIdentity::SubAuthUser),
        ]
        .into_iter()
        .flatten()
        .collect();

        if identities.len() != 1 {
            let found = identities.len();
            return Err(DomainError::InvalidCredentials(format!(
                "{} in credentials configuration file {source}: expected exactly one of {}; found {found}",
                if found == 0 {
                    "Missing property"
                } else {
                    "Unexpected properties"
                },
                IDENTITY_PARAMS.join(", "),
            )));
        }

        let password = self
            .auth_password
            .and_then(CredentialValue::into_non_empty)
            .ok_or_else(|| {
                DomainError::InvalidCredentials(format!(
                    "Missing property in credentials configuration file {source}: {PASSWORD_PARAM}"
                ))
            })?;

        Credentials::new(identities.remove(0), password)
    }
}

fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|quote| {
            value
                .strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(value)
}
