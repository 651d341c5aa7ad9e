//! WebSocket transport over tokio-tungstenite.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Error as WsError;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use tipfax_core::error::{Result, TipfaxError};

use super::codec::{decode, encode, Incoming};
use super::{Connector, Transport};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Dials `ws://` / `wss://` URLs.
#[derive(Debug, Default, Clone, Copy)]
pub struct WsConnector;

#[async_trait]
impl Connector for WsConnector {
    type Conn = WsTransport;

    async fn connect(&self, url: &str) -> Result<WsTransport> {
        let (ws, _resp) = connect_async(url)
            .await
            .map_err(|e| TipfaxError::transport(format!("connect {url} failed: {e}")))?;
        Ok(WsTransport { ws })
    }
}

pub struct WsTransport {
    ws: WsStream,
}

#[async_trait]
impl Transport for WsTransport {
    async fn write_message(&mut self, text: String) -> Result<()> {
        self.ws
            .send(encode(text))
            .await
            .map_err(|e| TipfaxError::transport(format!("write failed: {e}")))
    }

    async fn read_message(&mut self) -> Result<String> {
        loop {
            let msg = self
                .ws
                .next()
                .await
                .ok_or_else(|| TipfaxError::transport("connection closed"))?
                .map_err(|e| TipfaxError::transport(format!("read failed: {e}")))?;

            match decode(msg)? {
                Incoming::Text(s) => return Ok(s),
                Incoming::Control => continue,
                Incoming::Close => return Err(TipfaxError::transport("connection closed by peer")),
            }
        }
    }

    async fn close(&mut self) -> Result<()> {
        match self.ws.close(None).await {
            Ok(()) => Ok(()),
            // peer already finished the closing handshake
            Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => Ok(()),
            Err(e) => Err(TipfaxError::transport(format!("close failed: {e}"))),
        }
    }
}
