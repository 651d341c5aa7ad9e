//! Acknowledgement (`response`) classification.
//!
//! The endpoint does not send a structured status, so success/error is decided
//! from the free-text `message` plus the `code` / `type` fields:
//!
//! 1. `message` contains a success keyword => success. Nothing overrides this.
//! 2. `message` contains an error keyword => error.
//! 3. otherwise a `code` key, or `type == "error"`, forces error.
//!
//! Keyword matching is case-insensitive substring matching.

use serde_json::Value;

use super::envelope::str_field;

const SUCCESS_KEYWORDS: &[&str] = &["success", "subscribed"];
const ERROR_KEYWORDS: &[&str] = &[
    "error",
    "failed",
    "invalid",
    "unauthorized",
    "forbidden",
    "not found",
];

/// Result of classifying a `response` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AckClassification {
    pub is_error: bool,
    pub message: Option<String>,
    pub code: Option<String>,
    pub error_type: Option<String>,
    pub topic: Option<String>,
    pub room: Option<String>,
}

impl AckClassification {
    /// Classify a `response` payload. Returns `None` when `data` is not an object.
    pub fn classify(data: &Value) -> Option<Self> {
        let obj = data.as_object()?;

        let message = str_field(data, "message");
        let error_type = str_field(data, "type");
        let code = obj.get("code").and_then(code_text);

        let is_error = match message.as_deref().map(str::to_lowercase) {
            Some(lower) if contains_any(&lower, SUCCESS_KEYWORDS) => false,
            lower => {
                lower.is_some_and(|l| contains_any(&l, ERROR_KEYWORDS))
                    || obj.contains_key("code")
                    || error_type.as_deref() == Some("error")
            }
        };

        Some(Self {
            is_error,
            message,
            code,
            error_type,
            topic: str_field(data, "topic"),
            room: str_field(data, "room"),
        })
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|k| haystack.contains(k))
}

// Codes arrive as strings or numbers depending on the error path.
fn code_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
