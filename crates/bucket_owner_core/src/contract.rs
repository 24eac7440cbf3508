use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const OWNER_TAG_KEY: &str = "Owner";
pub const DEFAULT_CONCURRENCY: usize = 20;
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 60;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET,OPTIONS";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub type ResponseHeaders = BTreeMap<String, String>;

/// One bucket and the value of its `Owner` tag, empty when unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BucketRecord {
    pub name: String,
    pub owner: String,
}

impl BucketRecord {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketsPayload {
    pub buckets: Vec<BucketRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
