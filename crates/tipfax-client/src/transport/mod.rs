//! Transport layer (WebSocket).
//!
//! The session only talks to the `Connector`/`Transport` traits: whole JSON
//! text messages in, whole JSON text messages out. `ws` provides the
//! tokio-tungstenite implementation; tests plug in scripted transports.

pub mod codec;
pub mod ws;

use async_trait::async_trait;

use tipfax_core::error::Result;

pub use ws::{WsConnector, WsTransport};

/// Ordered, reliable, message-oriented connection.
#[async_trait]
pub trait Transport: Send {
    /// Write one whole text message.
    async fn write_message(&mut self, text: String) -> Result<()>;

    /// Block until the next whole text message arrives.
    /// Fails when the connection is closed or broken.
    async fn read_message(&mut self) -> Result<String>;

    /// Close the connection.
    async fn close(&mut self) -> Result<()>;
}

/// Dials a URL and yields a connected transport.
#[async_trait]
pub trait Connector: Send + Sync {
    type Conn: Transport;

    async fn connect(&self, url: &str) -> Result<Self::Conn>;
}
