//! Error types and API error-envelope classification.
//!
//! There are two error channels: transport failures reported by `reqwest`,
//! and API-level errors embedded in an otherwise delivered response body.
//! OpenAI-style APIs return the latter as:
//! `{ "error": { "message": "...", "type": "...", "code": "...", "param": "..." } }`
//!
//! Both channels surface through [`OpenAiError`]; each call site decides
//! recoverability from the returned `Result`.

use serde_json::Value;

/// Errors returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// Transport-level failure (connect, DNS, TLS, timeout, body read).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value (API key, header, proxy or base URL).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The API rejected the credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The API reported a rate limit.
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// The account quota is exhausted.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The API rejected the request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other API error envelope.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status of the response carrying the envelope.
        status: u16,
        /// The envelope's `message` field.
        message: String,
        /// The envelope's `type` field, when present.
        error_type: Option<String>,
        /// The envelope's `code` field, when present.
        code: Option<String>,
        /// The envelope's `param` field, when present.
        param: Option<String>,
    },
}

/// Classify an API error envelope embedded in a parsed response body.
///
/// Returns `None` when the body carries no `error` field. Presence of the
/// field is the trigger, regardless of HTTP status: the API reports errors
/// in the body even on responses that were delivered successfully.
///
/// Prefers the structured `type` field; falls back to message heuristics
/// when `type` is absent or empty.
pub(crate) fn classify_error_envelope(status: u16, body: &Value) -> Option<OpenAiError> {
    let envelope = body.get("error")?;

    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string();
    let error_type = envelope.get("type").and_then(Value::as_str);
    let code = envelope.get("code").and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    let param = envelope
        .get("param")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mapped = match error_type.unwrap_or("") {
        "authentication_error" => OpenAiError::Authentication(message),
        "rate_limit_error" => OpenAiError::RateLimit(message),
        "insufficient_quota" => OpenAiError::QuotaExceeded(message),
        "invalid_request_error" => OpenAiError::InvalidRequest(message),
        "not_found_error" => OpenAiError::NotFound(message),
        "" => classify_by_message(status, message, code, param),
        other => OpenAiError::Api {
            status,
            message,
            error_type: Some(other.to_string()),
            code,
            param,
        },
    };

    Some(mapped)
}

fn classify_by_message(
    status: u16,
    message: String,
    code: Option<String>,
    param: Option<String>,
) -> OpenAiError {
    let lower = message.to_lowercase();

    if status == 401 || lower.contains("api key") || lower.contains("unauthorized") {
        return OpenAiError::Authentication(message);
    }
    if status == 429 || lower.contains("rate limit") || lower.contains("ratelimit") {
        return OpenAiError::RateLimit(message);
    }
    if lower.contains("quota") {
        return OpenAiError::QuotaExceeded(message);
    }
    if status == 404 {
        return OpenAiError::NotFound(message);
    }
    if status == 400 || lower.contains("invalid") {
        return OpenAiError::InvalidRequest(message);
    }

    OpenAiError::Api {
        status,
        message,
        error_type: None,
        code,
        param,
    }
}
