//! Response handling shared by the v1 and v2 clients.

use jwplatform_core::error::{JwPlatformError, JwPlatformResult};
use serde_json::Value;

/// Read the response body and either parse it as JSON (200/201) or
/// classify it as an API error.
pub(crate) async fn parse_response(response: reqwest::Response) -> JwPlatformResult<Value> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| JwPlatformError::Request(format!("Failed to read response: {}", e)))?;

    if status == 200 || status == 201 {
        return serde_json::from_str(&body).map_err(|e| {
            JwPlatformError::Parse(format!("Failed to parse response: {} - body: {}", e, body))
        });
    }

    Err(classify_error(&body))
}

/// Map a non-2xx response body to an error variant via its `code` field.
///
/// Bodies that are not JSON, or JSON without a string `code`, become
/// `Unknown` so the raw server output still reaches the caller.
pub(crate) fn classify_error(body: &str) -> JwPlatformError {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => match json.get("code").and_then(Value::as_str) {
            Some(code) => JwPlatformError::from_error_code(code, body),
            None => JwPlatformError::Unknown(body.to_string()),
        },
        Err(_) => JwPlatformError::Unknown(body.to_string()),
    }
}
