use crate::contract::{
    ApiGatewayResponse, BucketRecord, BucketsPayload, ErrorPayload, ResponseHeaders,
    ALLOWED_METHODS, DEFAULT_ALLOWED_ORIGIN, DEFAULT_CACHE_MAX_AGE_SECS, JSON_CONTENT_TYPE,
};

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const HEADER_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const HEADER_CACHE_CONTROL: &str = "Cache-Control";

/// Header values that vary by deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePolicy {
    pub cache_max_age_secs: u64,
    pub allowed_origin: String,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

pub fn success_response(
    records: Vec<BucketRecord>,
    policy: &ResponsePolicy,
) -> ApiGatewayResponse {
    let payload = BucketsPayload { buckets: records };
    let body = match serde_json::to_string(&payload) {
        Ok(value) => value,
        Err(error) => {
            return error_response(500, "serialization_error", &error.to_string(), policy);
        }
    };

    ApiGatewayResponse {
        status_code: 200,
        headers: build_headers(policy, format!("max-age={}", policy.cache_max_age_secs)),
        body,
    }
}

/// Failures are never cached by the client, but keep CORS headers so the
/// embedding page can still read the error body.
pub fn error_response(
    status_code: u16,
    error: &str,
    message: &str,
    policy: &ResponsePolicy,
) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: build_headers(policy, "no-store".to_string()),
        body: error_body(error, message),
    }
}

fn error_body(error: &str, message: &str) -> String {
    let payload = ErrorPayload {
        error: error.to_string(),
        message: message.to_string(),
    };
    serde_json::to_string(&payload)
        .unwrap_or_else(|_| r#"{"error":"serialization_error","message":""}"#.to_string())
}

fn build_headers(policy: &ResponsePolicy, cache_control: String) -> ResponseHeaders {
    ResponseHeaders::from([
        (HEADER_CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()),
        (HEADER_ALLOW_ORIGIN.to_string(), policy.allowed_origin.clone()),
        (HEADER_ALLOW_METHODS.to_string(), ALLOWED_METHODS.to_string()),
        (HEADER_CACHE_CONTROL.to_string(), cache_control),
    ])
}
