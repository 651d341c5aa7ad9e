//! Protocol modules for the Astro pub/sub endpoint.
//!
//! - `envelope`: inbound/outbound JSON envelope and its tagged view.
//! - `subscribe`: subscribe/unsubscribe request builder.
//! - `ack`: heuristic success/error classification of `response` payloads.
//! - `tip`: tip record extraction from `message` payloads.
//!
//! All extractors are panic-free: payloads that do not match the expected shape
//! degrade per field to defaults, or surface a `TipfaxError::Parse`.

pub mod ack;
pub mod envelope;
pub mod subscribe;
pub mod tip;

/// Default Astro endpoint.
pub const DEFAULT_ASTRO_URL: &str = "wss://astro.streamelements.com/";

/// Topic carrying tip events.
pub const TIPS_TOPIC: &str = "channel.tips";

/// Topic carrying tip moderation events (not consumed by the client).
pub const TIPS_MODERATION_TOPIC: &str = "channel.tips.moderation";
