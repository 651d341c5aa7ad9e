//! Astro session: connection lifecycle and topic subscription.
//!
//! State machine:
//! `Disconnected -connect-> Connected -subscribe-> Subscribed
//!  -unsubscribe-> Connected -disconnect-> Disconnected`
//!
//! The session exclusively owns the transport handle. Every operation takes
//! `&mut self`, so callers in more than one task must wrap it in a mutex.

use std::sync::Arc;

use tipfax_core::error::{Result, TipfaxError};
use tipfax_core::protocol::envelope::Envelope;
use tipfax_core::protocol::subscribe::{RequestKind, SubscriptionRequest};
use tipfax_core::protocol::{DEFAULT_ASTRO_URL, TIPS_TOPIC};
use tipfax_core::Credential;

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::obs::{Observer, SessionEvent};
use crate::transport::{Connector, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
    Subscribed,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub url: String,
    pub topic: String,
    /// Credentials shorter than this only produce a warning.
    pub min_token_len: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_ASTRO_URL.to_string(),
            topic: TIPS_TOPIC.to_string(),
            min_token_len: 50,
        }
    }
}

impl SessionOptions {
    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self {
            url: cfg.astro.url.clone(),
            topic: TIPS_TOPIC.to_string(),
            min_token_len: cfg.astro.min_token_len,
        }
    }
}

pub struct Session<T: Transport> {
    opts: SessionOptions,
    token: Credential,
    observer: Arc<dyn Observer>,
    conn: Option<T>,
    state: SessionState,
}

impl<T: Transport> Session<T> {
    pub fn new(opts: SessionOptions, token: Credential, observer: Arc<dyn Observer>) -> Self {
        Self {
            opts,
            token,
            observer,
            conn: None,
            state: SessionState::Disconnected,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Dial the endpoint. There is no retry: callers treat failure as fatal.
    pub async fn connect<C>(&mut self, connector: &C) -> Result<()>
    where
        C: Connector<Conn = T>,
    {
        if self.conn.is_some() {
            return Ok(());
        }

        let url = self.opts.url.clone();
        self.observer
            .on_event(&SessionEvent::Connecting { url: url.clone() });

        match connector.connect(&url).await {
            Ok(conn) => {
                self.conn = Some(conn);
                self.state = SessionState::Connected;
                self.observer.on_event(&SessionEvent::Connected { url });
                Ok(())
            }
            Err(e) => {
                self.observer.on_event(&SessionEvent::ConnectFailed {
                    url,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Send a subscribe request for the tips topic and return its nonce.
    ///
    /// The acknowledgement arrives later through `listen`; it is not awaited here.
    pub async fn subscribe(&mut self) -> Result<String> {
        if self.token.is_empty() {
            return Err(TipfaxError::Config(
                "jwt token is empty or not set".into(),
            ));
        }
        if self.token.len() < self.opts.min_token_len {
            self.observer.on_event(&SessionEvent::TokenShort {
                len: self.token.len(),
                min: self.opts.min_token_len,
            });
        }

        match self.send_request(RequestKind::Subscribe).await {
            Ok(nonce) => {
                self.state = SessionState::Subscribed;
                Ok(nonce)
            }
            Err(e) => {
                self.observer.on_event(&SessionEvent::RequestFailed {
                    kind: RequestKind::Subscribe,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Best-effort unsubscribe. Write failures are reported to the observer and
    /// swallowed so shutdown can proceed.
    pub async fn unsubscribe(&mut self) -> Result<()> {
        if let Err(e) = self.send_request(RequestKind::Unsubscribe).await {
            self.observer.on_event(&SessionEvent::RequestFailed {
                kind: RequestKind::Unsubscribe,
                error: e.to_string(),
            });
        }
        if self.conn.is_some() {
            self.state = SessionState::Connected;
        }
        Ok(())
    }

    /// Close the transport. A no-op when already disconnected (including after
    /// `listen` failed on a broken connection).
    pub async fn disconnect(&mut self) -> Result<()> {
        let Some(mut conn) = self.conn.take() else {
            self.state = SessionState::Disconnected;
            return Ok(());
        };

        self.observer.on_event(&SessionEvent::Disconnecting);
        let res = conn.close().await;
        self.state = SessionState::Disconnected;
        if res.is_ok() {
            self.observer.on_event(&SessionEvent::Disconnected);
        }
        res
    }

    /// Receive loop. Reads envelopes until the transport fails and hands each
    /// one to `dispatcher`. Only returns on failure.
    ///
    /// A read failure drops the dead handle (state becomes `Disconnected`); an
    /// envelope decode failure keeps the connection so it can still be closed.
    pub async fn listen(&mut self, dispatcher: &mut Dispatcher) -> Result<()> {
        loop {
            let read = match self.conn.as_mut() {
                Some(conn) => conn.read_message().await,
                None => return Err(TipfaxError::transport("not connected")),
            };

            let text = match read {
                Ok(text) => text,
                Err(e) => {
                    self.conn = None;
                    self.state = SessionState::Disconnected;
                    self.observer.on_event(&SessionEvent::ReadFailed {
                        error: e.to_string(),
                    });
                    return Err(e);
                }
            };

            let env = match Envelope::decode(&text) {
                Ok(env) => env,
                Err(e) => {
                    self.observer.on_event(&SessionEvent::ReadFailed {
                        error: e.to_string(),
                    });
                    return Err(e);
                }
            };

            self.observer.on_event(&SessionEvent::Received {
                msg_type: env.msg_type.clone(),
                topic: env.topic.clone(),
                nonce: env.nonce.clone(),
            });
            dispatcher.dispatch(env);
        }
    }

    async fn send_request(&mut self, kind: RequestKind) -> Result<String> {
        let conn = self
            .conn
            .as_mut()
            .ok_or_else(|| TipfaxError::transport("not connected"))?;

        let req = SubscriptionRequest::new(kind, &self.opts.topic, &self.token);
        conn.write_message(req.encode()?).await?;

        self.observer.on_event(&SessionEvent::RequestSent {
            kind,
            topic: self.opts.topic.clone(),
            nonce: req.nonce.clone(),
            token_len: self.token.len(),
            token_preview: self.token.preview(),
        });
        Ok(req.nonce)
    }
}
