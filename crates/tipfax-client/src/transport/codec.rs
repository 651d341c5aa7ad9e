//! Frame codec for the transport layer.
//!
//! - Text frames => envelope text
//! - Binary frames => envelope text if valid UTF-8
//! - Ping/Pong/raw frames are control traffic (tungstenite answers pings itself)
//! - Close is surfaced so the reader can stop

use tokio_tungstenite::tungstenite::Message;

use tipfax_core::error::{Result, TipfaxError};

#[derive(Debug, PartialEq, Eq)]
pub enum Incoming {
    Text(String),
    Control,
    Close,
}

pub fn decode(msg: Message) -> Result<Incoming> {
    match msg {
        Message::Text(s) => Ok(Incoming::Text(s.as_str().to_owned())),
        Message::Binary(b) => String::from_utf8(b.to_vec())
            .map(Incoming::Text)
            .map_err(|e| TipfaxError::Decode(format!("binary frame is not utf-8: {e}"))),
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => Ok(Incoming::Control),
        Message::Close(_) => Ok(Incoming::Close),
    }
}

pub fn encode(text: String) -> Message {
    Message::Text(text.into())
}
