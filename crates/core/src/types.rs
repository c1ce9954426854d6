use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The API a payload was sent to, e.g. `com.marketo` / `v1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CollectorApi {
    pub vendor: String,
    pub version: String,
}

impl CollectorApi {
    pub fn new(vendor: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            version: version.into(),
        }
    }
}

/// A single querystring parameter as received by the collector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameValuePair {
    pub name: String,
    pub value: String,
}

impl NameValuePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Which collector produced the payload and how it was encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectorSource {
    pub name: String,
    pub encoding: String,
    #[serde(default)]
    pub hostname: Option<String>,
}

/// Network-level context captured alongside the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectorContext {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub useragent: Option<String>,
    #[serde(default)]
    pub referer: Option<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Transport envelope handed to an adapter by the collector layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectorPayload {
    pub api: CollectorApi,
    #[serde(default)]
    pub querystring: Vec<NameValuePair>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub source: CollectorSource,
    #[serde(default)]
    pub context: CollectorContext,
}

/// Vendor-neutral event produced by an adapter, ready for enrichment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub api: CollectorApi,
    pub parameters: BTreeMap<String, String>,
    pub content_type: Option<String>,
    pub source: CollectorSource,
    pub context: CollectorContext,
}
