//! Shared HTTP client and header helpers.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::PenwrightError;

/// Shared-secret header of the secondary store. Header names are case-insensitive, so this is `XAPIKEY`.
pub const SHARED_SECRET_HEADER: HeaderName = HeaderName::from_static("xapikey");

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client");
                reqwest::Client::new()
            })
    })
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = json_headers();
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Build headers for the secondary store, which authenticates with a shared
/// secret in `XAPIKEY`.
pub fn shared_secret_headers(secret: &str) -> HeaderMap {
    let mut headers = json_headers();
    if let Ok(val) = HeaderValue::from_str(secret) {
        headers.insert(SHARED_SECRET_HEADER, val);
    }
    headers
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Map a failed model-API status to an error.
pub fn status_to_error(status: u16, body: &str) -> PenwrightError {
    match status {
        401 | 403 => PenwrightError::Authentication(body.to_string()),
        429 => PenwrightError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => PenwrightError::api(status, body),
    }
}

fn extract_retry_after(body: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}
