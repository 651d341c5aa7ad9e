//! tipfax core: transport-agnostic protocol primitives, error types, and payload
//! extraction for the Astro pub/sub tip feed.
//!
//! This crate defines the wire-level contracts (envelopes, subscription
//! requests), the acknowledgement classifier and the tip extractor. It carries
//! no transport or runtime dependencies so the same rules can be exercised by
//! the client, by tests, and by offline tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Payloads from the remote endpoint are loosely typed; every extraction path
//! degrades to a default or surfaces a `TipfaxError` instead of crashing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod credential;
pub mod error;
pub mod protocol;

pub use credential::Credential;
/// Shared result type.
pub use error::{ErrorKind, Result, TipfaxError};
