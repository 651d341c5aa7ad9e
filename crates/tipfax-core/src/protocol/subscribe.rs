//! Subscribe / unsubscribe requests.
//!
//! Outbound shape: `{type, nonce, data: {topic, token, token_type: "jwt"}}`.
//! A fresh nonce is generated per request; it is only used for log correlation.

use serde::Serialize;
use uuid::Uuid;

use crate::credential::Credential;
use crate::error::{Result, TipfaxError};

/// Request direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Subscribe,
    Unsubscribe,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Subscribe => "subscribe",
            RequestKind::Unsubscribe => "unsubscribe",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionRequest {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub nonce: String,
    pub data: SubscriptionData,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionData {
    pub topic: String,
    pub token: String,
    pub token_type: &'static str,
}

impl SubscriptionRequest {
    pub fn new(kind: RequestKind, topic: &str, token: &Credential) -> Self {
        Self {
            kind,
            nonce: Uuid::new_v4().to_string(),
            data: SubscriptionData {
                topic: topic.to_owned(),
                token: token.expose().to_owned(),
                token_type: "jwt",
            },
        }
    }

    /// Serialize to a JSON text frame.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| TipfaxError::Parse(format!("json encode failed: {e}")))
    }
}
