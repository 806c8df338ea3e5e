use cloudns_dns01_domain::TxtRecord;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Decoded ClouDNS response: HTTP status, error flag and JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub error: bool,
    pub payload: Value,
}

impl ApiResponse {
    /// `None` when the body is not JSON.
    pub fn decode(status_code: u16, body: &str) -> Option<Self> {
        let payload: Value = serde_json::from_str(body).ok()?;
        let error = is_failure_payload(&payload);
        Some(Self {
            status_code,
            error,
            payload,
        })
    }

    pub fn is_successful(&self) -> bool {
        !self.error && self.status_code == 200
    }
}

/// ClouDNS signals application errors with `"status": "Failed"` in an
/// otherwise successful HTTP response.
fn is_failure_payload(payload: &Value) -> bool {
    payload
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|status| status.eq_ignore_ascii_case("failed"))
}

/// One entry of the `records.json` listing.
#[derive(Debug, Deserialize)]
pub struct ListedRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    host: String,
    record: String,
    #[serde(default)]
    ttl: Option<Value>,
}

impl ListedRecord {
    /// Parses a listing payload: an object keyed by record id, or an empty
    /// array when the host has no records.
    pub fn collect(payload: Value) -> BTreeMap<String, TxtRecord> {
        let Value::Object(entries) = payload else {
            return BTreeMap::new();
        };

        entries
            .into_iter()
            .filter_map(|(key, entry)| match serde_json::from_value::<ListedRecord>(entry) {
                Ok(listed) => Some((key.clone(), listed.into_txt_record(key))),
                Err(e) => {
                    debug!(record_id = %key, error = %e, "Skipping unparseable record entry");
                    None
                }
            })
            .collect()
    }

    fn into_txt_record(self, key: String) -> TxtRecord {
        TxtRecord {
            id: self.id.as_ref().and_then(value_to_string).unwrap_or(key),
            host: self.host,
            content: self.record,
            ttl: self
                .ttl
                .as_ref()
                .and_then(value_to_string)
                .and_then(|ttl| ttl.parse().ok()),
        }
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
