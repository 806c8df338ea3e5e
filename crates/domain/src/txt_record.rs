use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dns_name::normalize_name;

pub const TXT_RECORD_TYPE: &str = "TXT";

/// Zone that owns a record, and the record's host label within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneHost {
    pub zone: String,
    pub host: String,
}

impl ZoneHost {
    pub fn new(zone: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            zone: normalize_name(&zone.into()).to_string(),
            host: host.into(),
        }
    }

    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.host, self.zone)
    }
}

impl fmt::Display for ZoneHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (zone {})", self.fqdn(), self.zone)
    }
}

/// A TXT record as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtRecord {
    pub id: String,
    pub host: String,
    pub content: String,
    pub ttl: Option<u32>,
}
