//! Shared error type across tipfax crates.

use thiserror::Error;

/// Stable error categories (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential or invalid configuration.
    Config,
    /// Connect/read/write/close failure.
    Transport,
    /// Inbound frame is not a well-formed envelope.
    Decode,
    /// Payload does not have the shape expected for its message type.
    Parse,
}

impl ErrorKind {
    /// String representation used in structured log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG_ERROR",
            ErrorKind::Transport => "TRANSPORT_ERROR",
            ErrorKind::Decode => "DECODE_ERROR",
            ErrorKind::Parse => "PARSE_ERROR",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TipfaxError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum TipfaxError {
    #[error("config: {0}")]
    Config(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("parse: {0}")]
    Parse(String),
}

impl TipfaxError {
    /// Map the error to its stable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TipfaxError::Config(_) => ErrorKind::Config,
            TipfaxError::Transport(_) => ErrorKind::Transport,
            TipfaxError::Decode(_) => ErrorKind::Decode,
            TipfaxError::Parse(_) => ErrorKind::Parse,
        }
    }

    /// Convenience constructor for transport failures.
    pub fn transport(msg: impl Into<String>) -> Self {
        TipfaxError::Transport(msg.into())
    }
}
