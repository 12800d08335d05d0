//! Provider error helpers.
//!
//! Error bodies from inference services can echo request headers or tokens
//! back, so they are reduced to their message, scrubbed of credentials and
//! truncated before they end up in an error value or a log line.

use crate::error::Text2SqlError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 512;

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static HF_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bhf_[A-Za-z0-9]{8,}").expect("valid hf token regex"));

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(api[_-]?key|access[_-]?token|token|secret|password)\b\s*[:=]\s*["']?[^"',\s}]+"#)
        .expect("valid key/value secret regex")
});

/// Reduce a provider error body to a short, credential-free message.
///
/// JSON bodies of the form `{"error": "..."}` or
/// `{"error": {"message": "..."}}` yield just the message.
pub fn sanitize_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error response body>".to_string();
    }

    let message = serde_json::from_str::<Value>(trimmed)
        .ok()
        .and_then(|json| extract_message(&json))
        .unwrap_or_else(|| trimmed.to_string());

    truncate(redact(&message))
}

fn extract_message(json: &Value) -> Option<String> {
    match json.get("error")? {
        Value::String(message) => Some(message.clone()),
        Value::Object(inner) => inner
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn redact(input: &str) -> String {
    let step = BEARER_TOKEN_RE.replace_all(input, "Bearer [REDACTED]");
    let step = HF_TOKEN_RE.replace_all(&step, "hf_[REDACTED]");
    KEY_VALUE_SECRET_RE
        .replace_all(&step, "$1=[REDACTED]")
        .into_owned()
}

fn truncate(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }

    let truncated: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!(
        "{}... [truncated {} chars]",
        truncated,
        char_count - MAX_ERROR_TEXT_CHARS
    )
}

/// Build a model error from a non-success HTTP response.
pub async fn status_error(response: reqwest::Response, provider: &str, model: &str) -> Text2SqlError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Text2SqlError::model_status(
        format!(
            "{} API error (status {}): {}",
            provider,
            status.as_u16(),
            sanitize_error_text(&body)
        ),
        model,
        status.as_u16(),
    )
}

/// Build an error from a failed send, keeping timeouts distinguishable.
pub fn send_error(err: reqwest::Error, provider: &str, timeout_secs: u64) -> Text2SqlError {
    if err.is_timeout() {
        return Text2SqlError::timeout(format!("{} request", provider), timeout_secs);
    }
    let mut error = Text2SqlError::from(err);
    if let Text2SqlError::Http { message, .. } = &mut error {
        *message = format!("{} request failed: {}", provider, redact(message));
    }
    error
}

/// Build a model error from a body that did not match the expected shape.
pub fn parse_error(err: impl std::fmt::Display, provider: &str, model: &str) -> Text2SqlError {
    Text2SqlError::Model {
        message: format!("Failed to parse {} response: {}", provider, err),
        model: Some(model.to_string()),
        status_code: None,
    }
}
