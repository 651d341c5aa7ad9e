//! Structured session events and the observers that consume them.
//!
//! Components never log directly: they emit `SessionEvent`s into an injected
//! `Observer`. `TracingObserver` turns them into `tracing` events;
//! `MemoryObserver` records them for assertions.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use tipfax_core::protocol::ack::AckClassification;
use tipfax_core::protocol::envelope::{Envelope, Welcome};
use tipfax_core::protocol::subscribe::RequestKind;
use tipfax_core::protocol::tip::TipRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Connecting { url: String },
    Connected { url: String },
    ConnectFailed { url: String, error: String },
    TokenShort { len: usize, min: usize },
    RequestSent {
        kind: RequestKind,
        topic: String,
        nonce: String,
        token_len: usize,
        token_preview: String,
    },
    RequestFailed { kind: RequestKind, error: String },
    Received { msg_type: String, topic: String, nonce: String },
    Welcome(Welcome),
    Ack { nonce: String, ack: AckClassification, raw: Value },
    AckUnparsed { nonce: String, raw: Value },
    Tip(TipRecord),
    TipRejected { error: String, raw: Value },
    SinkFailed { error: String },
    Dropped { topic: String },
    Unknown(Envelope),
    ReadFailed { error: String },
    Disconnecting,
    Disconnected,
}

pub trait Observer: Send + Sync {
    fn on_event(&self, event: &SessionEvent);
}

/// Logs every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::Connecting { url } => tracing::info!(%url, "connecting to astro"),
            SessionEvent::Connected { url } => tracing::info!(%url, "connected to astro"),
            SessionEvent::ConnectFailed { url, error } => {
                tracing::error!(%url, %error, "connect failed")
            }
            SessionEvent::TokenShort { len, min } => tracing::warn!(
                len,
                min,
                "jwt token seems unusually short, it might be invalid"
            ),
            SessionEvent::RequestSent {
                kind,
                topic,
                nonce,
                token_len,
                token_preview,
            } => tracing::info!(
                kind = kind.as_str(),
                %topic,
                %nonce,
                token_len,
                %token_preview,
                "request sent, waiting for response"
            ),
            SessionEvent::RequestFailed { kind, error } => {
                tracing::warn!(kind = kind.as_str(), %error, "request write failed")
            }
            SessionEvent::Received {
                msg_type,
                topic,
                nonce,
            } => tracing::debug!(%msg_type, %topic, %nonce, "received message"),
            SessionEvent::Welcome(w) => tracing::info!(
                client_id = w.client_id.as_deref().unwrap_or("-"),
                welcome = w.message.as_deref().unwrap_or("-"),
                "welcome"
            ),
            SessionEvent::Ack { nonce, ack, raw } if ack.is_error => tracing::error!(
                %nonce,
                reply = ack.message.as_deref().unwrap_or("-"),
                code = ack.code.as_deref().unwrap_or("-"),
                error_type = ack.error_type.as_deref().unwrap_or("-"),
                %raw,
                "error response"
            ),
            SessionEvent::Ack { nonce, ack, raw } => tracing::info!(
                %nonce,
                reply = ack.message.as_deref().unwrap_or("-"),
                topic = ack.topic.as_deref().unwrap_or("-"),
                room = ack.room.as_deref().unwrap_or("-"),
                %raw,
                "success response"
            ),
            SessionEvent::AckUnparsed { nonce, raw } => {
                tracing::warn!(%nonce, %raw, "response data is not an object")
            }
            SessionEvent::Tip(tip) => tracing::info!(
                username = %tip.username,
                amount = %tip.amount,
                currency = %tip.currency,
                provider = %tip.provider,
                status = %tip.status,
                note = %tip.message,
                "new tip received"
            ),
            SessionEvent::TipRejected { error, raw } => {
                tracing::error!(%error, %raw, "could not parse tip data")
            }
            SessionEvent::SinkFailed { error } => tracing::warn!(%error, "receipt sink failed"),
            SessionEvent::Dropped { topic } => {
                tracing::info!(%topic, "notification on unhandled topic dropped")
            }
            SessionEvent::Unknown(env) => tracing::warn!(
                msg_type = %env.msg_type,
                topic = %env.topic,
                data = %env.data,
                "unknown message type"
            ),
            SessionEvent::ReadFailed { error } => tracing::error!(%error, "read failed"),
            SessionEvent::Disconnecting => tracing::info!("disconnecting from astro"),
            SessionEvent::Disconnected => tracing::info!("disconnected"),
        }
    }
}

/// Records events in memory.
#[derive(Debug, Default)]
pub struct MemoryObserver {
    events: Mutex<Vec<SessionEvent>>,
}

impl MemoryObserver {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl Observer for MemoryObserver {
    fn on_event(&self, event: &SessionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
