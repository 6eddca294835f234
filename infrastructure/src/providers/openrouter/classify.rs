//! Mapping of an HTTP outcome to a completion result.
//!
//! [`classify_response`] is the single place where status codes and
//! response bodies are turned into either the reply text or a
//! [`GatewayError`]. Transport failures never reach it: no response, no
//! status to classify.

use super::protocol::ChatCompletionResponse;
use reqwest::StatusCode;
use vakyalok_application::GatewayError;

/// Classify a received response.
///
/// | status | result |
/// |---|---|
/// | 2xx with non-blank `choices[0].message.content` | `Ok(trimmed content)` |
/// | 2xx otherwise | `MalformedResponse` |
/// | 401 | `AuthFailure` |
/// | 429 | `RateLimited` |
/// | 5xx | `UpstreamFailure` |
/// | anything else | `RequestFailure` |
pub fn classify_response(status: StatusCode, body: &str) -> Result<String, GatewayError> {
    if status.is_success() {
        return extract_reply(body).ok_or_else(GatewayError::malformed);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(GatewayError::auth()),
        StatusCode::TOO_MANY_REQUESTS => Err(GatewayError::rate_limited()),
        s if s.is_server_error() => Err(GatewayError::upstream()),
        s => Err(GatewayError::request_failed(
            upstream_message(body).unwrap_or_else(|| status_line(s)),
        )),
    }
}

fn extract_reply(body: &str) -> Option<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body).ok()?;
    let content = response.first_content()?.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Error message carried in a rejection body.
///
/// Accepts `{"error": {"message": ..}}`, `{"error": ".."}` and `{"message": ..}`.
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    [
        value.pointer("/error/message"),
        value.get("error"),
        value.get("message"),
    ]
    .into_iter()
    .flatten()
    .filter_map(|v| v.as_str())
    .map(str::trim)
    .find(|s| !s.is_empty())
    .map(str::to_string)
}

fn status_line(status: StatusCode) -> String {
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}
