//! Astro envelope (JSON text frame).
//!
//! `data` is kept as a generic `serde_json::Value`: its shape depends on
//! `type` and is only interpreted by the per-type extractors.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, TipfaxError};

/// Wire envelope: `{type, topic, nonce, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Message type (field name is `type` in JSON). Required.
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Topic name (only meaningful for `message`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic: String,
    /// Opaque correlation id.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nonce: String,
    /// Untyped payload.
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Decode a text frame into an envelope.
    pub fn decode(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| TipfaxError::Decode(format!("invalid envelope json: {e}")))
    }

    /// Classify by `type` into the tagged view.
    pub fn into_inbound(self) -> Inbound {
        match self.msg_type.as_str() {
            "welcome" => Inbound::Welcome(Welcome::from_data(&self.data)),
            "response" => Inbound::Response {
                nonce: self.nonce,
                data: self.data,
            },
            "message" => Inbound::Message {
                topic: self.topic,
                data: self.data,
            },
            _ => Inbound::Unknown(self),
        }
    }
}

/// Tagged view of an inbound envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Welcome(Welcome),
    Response { nonce: String, data: Value },
    Message { topic: String, data: Value },
    /// Unrecognized `type`; keeps the raw envelope for logging.
    Unknown(Envelope),
}

/// Informational fields of a `welcome` message. Both are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Welcome {
    pub client_id: Option<String>,
    pub message: Option<String>,
}

impl Welcome {
    pub fn from_data(data: &Value) -> Self {
        Self {
            client_id: str_field(data, "client_id"),
            message: str_field(data, "message"),
        }
    }
}

// Missing and `null` string fields both read as "".
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// Read `key` from an object value as an owned string, if it is one.
pub(crate) fn str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_owned)
}
