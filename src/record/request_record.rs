use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable snapshot of one captured request. Built once per request and
/// handed to every sink as-is.
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "isoDateTime")]
    pub iso_date_time: DateTime<Utc>,

    pub protocol: String,

    pub method: String,

    pub url: String,

    /// Declared body size in bytes, -1 when the transport did not report one.
    #[serde(rename = "contentLength")]
    pub content_length: i64,

    #[serde(rename = "ipClient")]
    pub ip_client: String,

    pub headers: BTreeMap<String, Vec<String>>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
}
