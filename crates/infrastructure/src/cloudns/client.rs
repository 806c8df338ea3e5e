use async_trait::async_trait;
use cloudns_dns01_application::ports::DnsProviderApi;
use cloudns_dns01_domain::config::ApiConfig;
use cloudns_dns01_domain::{Credentials, DomainError, TxtRecord};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use super::response::{ApiResponse, ListedRecord};

/// ClouDNS API operations used by the dns-01 flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    GetZone,
    ListRecords,
    AddRecord,
    DeleteRecord,
}

impl ApiOperation {
    pub fn path(&self) -> &'static str {
        match self {
            ApiOperation::GetZone => "/dns/get-zone-info.json",
            ApiOperation::ListRecords => "/dns/records.json",
            ApiOperation::AddRecord => "/dns/add-record.json",
            ApiOperation::DeleteRecord => "/dns/delete-record.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiOperation::GetZone => "get-zone-info",
            ApiOperation::ListRecords => "records",
            ApiOperation::AddRecord => "add-record",
            ApiOperation::DeleteRecord => "delete-record",
        }
    }
}

/// HTTP client for the ClouDNS API.
///
/// Holds no credentials: each call receives them and sends them as
/// request parameters of that call only.
pub struct ClouDnsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClouDnsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(concat!("cloudns-dns01/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DomainError::InvalidConfig(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self::with_client(http, &config.base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Calls `operation` and returns the decoded payload on success.
    pub async fn invoke(
        &self,
        operation: ApiOperation,
        credentials: &Credentials,
        params: &[(&str, &str)],
    ) -> Result<Value, DomainError> {
        let auth = credentials.auth_params();
        let mut form: Vec<(&str, &str)> = params.to_vec();
        for (key, value) in auth.iter() {
            form.push((key, value));
        }

        let url = format!("{}{}", self.base_url, operation.path());

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                DomainError::Communication(format!("{} request failed: {e}", operation.as_str()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::Communication(format!(
                "Failed to read {} response: {e}",
                operation.as_str()
            ))
        })?;

        debug!(
            operation = operation.as_str(),
            status = status.as_u16(),
            body = %body,
            "ClouDNS API response"
        );

        let response = match ApiResponse::decode(status.as_u16(), &body) {
            Some(response) => response,
            None if status == StatusCode::OK => {
                return Err(DomainError::Communication(format!(
                    "Undecodable {} response: {body}",
                    operation.as_str()
                )));
            }
            None => return Err(DomainError::Api { body }),
        };

        if response.is_successful() {
            Ok(response.payload)
        } else {
            Err(DomainError::Api { body })
        }
    }
}

#[async_trait]
impl DnsProviderApi for ClouDnsClient {
    async fn get_zone(&self, credentials: &Credentials, zone: &str) -> Result<(), DomainError> {
        self.invoke(ApiOperation::GetZone, credentials, &[("domain-name", zone)])
            .await?;
        Ok(())
    }

    async fn list_records(
        &self,
        credentials: &Credentials,
        zone: &str,
        host: &str,
        record_type: &str,
    ) -> Result<BTreeMap<String, TxtRecord>, DomainError> {
        let payload = self
            .invoke(
                ApiOperation::ListRecords,
                credentials,
                &[("domain-name", zone), ("host", host), ("type", record_type)],
            )
            .await?;

        Ok(ListedRecord::collect(payload))
    }

    async fn create_record(
        &self,
        credentials: &Credentials,
        zone: &str,
        host: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
    ) -> Result<(), DomainError> {
        let ttl = ttl.to_string();
        self.invoke(
            ApiOperation::AddRecord,
            credentials,
            &[
                ("domain-name", zone),
                ("record-type", record_type),
                ("host", host),
                ("record", content),
                ("ttl", &ttl),
            ],
        )
        .await?;
        Ok(())
    }

    async fn delete_record(
        &self,
        credentials: &Credentials,
        zone: &str,
        record_id: &str,
    ) -> Result<(), DomainError> {
        self.invoke(
            ApiOperation::DeleteRecord,
            credentials,
            &[("domain-name", zone), ("record-id", record_id)],
        )
        .await?;
        Ok(())
    }
}
