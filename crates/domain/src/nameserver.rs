use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::errors::DomainError;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Nameserver used for CNAME lookups, written as `IP` or `IP:port`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nameserver(SocketAddr);

impl Nameserver {
    pub fn new(addr: SocketAddr) -> Self {
        Self(addr)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.0
    }
}

impl FromStr for Nameserver {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }
        s.parse::<SocketAddr>().map(Self).map_err(|_| {
            DomainError::InvalidConfig(format!(
                "Invalid nameserver '{s}': expected an IP address, optionally with a port"
            ))
        })
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.port() == DEFAULT_DNS_PORT {
            write!(f, "{}", self.0.ip())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
