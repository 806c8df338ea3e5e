//! ClouDNS HTTP API client
//!
//! API documentation: <https://www.cloudns.net/wiki/article/41/>

mod client;
mod response;

pub use client::{ApiOperation, ClouDnsClient};
pub use response::{ApiResponse, ListedRecord};
