//! tipfax client library entry.
//!
//! This crate wires the transport, session, dispatcher, observers and receipt
//! sinks into a client for the Astro tip feed. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod dispatch;
pub mod obs;
pub mod session;
pub mod sink;
pub mod transport;
