use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use tipfax_core::protocol::ack::AckClassification;
use tipfax_core::protocol::envelope::{Envelope, Inbound, Welcome};
use tipfax_core::protocol::tip::TipRecord;
use tipfax_core::protocol::TIPS_TOPIC;

use crate::obs::{ClientMetrics, Observer, SessionEvent};
use crate::sink::ReceiptSink;

/// What the dispatcher did with one envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    Welcome(Welcome),
    Ack(AckClassification),
    /// `response` whose data is not an object.
    AckUnparsed,
    Tip(TipRecord),
    /// Tips-topic message without a usable `donation` object.
    TipRejected,
    /// `message` on a topic other than the tips topic.
    Dropped,
    Unknown,
}

/// Routes inbound envelopes by `type`. Never fails: payload problems are
/// reported to the observer and the envelope is dropped.
pub struct Dispatcher {
    tips_topic: String,
    observer: Arc<dyn Observer>,
    sink: Option<Box<dyn ReceiptSink>>,
    metrics: Arc<ClientMetrics>,
}

impl Dispatcher {
    pub fn new(observer: Arc<dyn Observer>) -> Self {
        Self {
            tips_topic: TIPS_TOPIC.to_string(),
            observer,
            sink: None,
            metrics: Arc::new(ClientMetrics::default()),
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn ReceiptSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<ClientMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &ClientMetrics {
        &self.metrics
    }

    pub fn dispatch(&mut self, env: Envelope) -> Dispatched {
        let label = match env.msg_type.as_str() {
            t @ ("welcome" | "response" | "message" | "subscribe" | "unsubscribe") => t,
            _ => "unknown",
        };
        self.metrics.messages.inc(&[("type", label)]);

        match env.into_inbound() {
            Inbound::Welcome(w) => {
                self.observer.on_event(&SessionEvent::Welcome(w.clone()));
                Dispatched::Welcome(w)
            }
            Inbound::Response { nonce, data } => self.handle_response(nonce, data),
            Inbound::Message { topic, data } if topic == self.tips_topic => self.handle_tip(data),
            Inbound::Message { topic, .. } => {
                self.observer.on_event(&SessionEvent::Dropped { topic });
                Dispatched::Dropped
            }
            Inbound::Unknown(env) => {
                self.observer.on_event(&SessionEvent::Unknown(env));
                Dispatched::Unknown
            }
        }
    }

    fn handle_response(&mut self, nonce: String, data: Value) -> Dispatched {
        let Some(ack) = AckClassification::classify(&data) else {
            self.metrics.acks.inc(&[("outcome", "unparsed")]);
            self.observer
                .on_event(&SessionEvent::AckUnparsed { nonce, raw: data });
            return Dispatched::AckUnparsed;
        };

        let outcome = if ack.is_error { "error" } else { "success" };
        self.metrics.acks.inc(&[("outcome", outcome)]);
        self.observer.on_event(&SessionEvent::Ack {
            nonce,
            ack: ack.clone(),
            raw: data,
        });
        Dispatched::Ack(ack)
    }

    fn handle_tip(&mut self, data: Value) -> Dispatched {
        let tip = match TipRecord::from_event(&data) {
            Ok(tip) => tip,
            Err(e) => {
                self.metrics.tips.inc(&[("result", "rejected")]);
                self.observer.on_event(&SessionEvent::TipRejected {
                    error: e.to_string(),
                    raw: data,
                });
                return Dispatched::TipRejected;
            }
        };

        self.metrics.tips.inc(&[("result", "extracted")]);
        self.observer.on_event(&SessionEvent::Tip(tip.clone()));
        self.print(&tip);
        Dispatched::Tip(tip)
    }

    fn print(&mut self, tip: &TipRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let started = Instant::now();
        let res = tip
            .receipt_lines()
            .iter()
            .try_for_each(|line| sink.write_line(line))
            .and_then(|_| sink.finalize());
        self.metrics.sink_duration.observe(&[], started.elapsed());

        if let Err(e) = res {
            self.metrics.sink_errors.inc(&[]);
            self.observer.on_event(&SessionEvent::SinkFailed {
                error: e.to_string(),
            });
        }
    }
}
