//! Frame codec: websocket message kinds to envelope text.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;
use tokio_tungstenite::tungstenite::Message;

use tipfax_client::transport::codec::{decode, encode, Incoming};

#[test]
fn text_frame_passes_through() {
    let got = decode(Message::Text(r#"{"type":"welcome"}"#.into())).unwrap();
    assert_eq!(got, Incoming::Text(r#"{"type":"welcome"}"#.to_string()));
}

#[test]
fn utf8_binary_frame_is_text() {
    let got = decode(Message::Binary(Bytes::from_static(br#"{"type":"welcome"}"#))).unwrap();
    assert_eq!(got, Incoming::Text(r#"{"type":"welcome"}"#.to_string()));
}

#[test]
fn non_utf8_binary_frame_is_decode_error() {
    let err = decode(Message::Binary(Bytes::from_static(&[0xff, 0xfe, 0x00]))).unwrap_err();
    assert_eq!(err.kind().as_str(), "DECODE_ERROR");
}

#[test]
fn ping_and_pong_are_control() {
    assert_eq!(decode(Message::Ping(Bytes::new())).unwrap(), Incoming::Control);
    assert_eq!(
        decode(Message::Pong(Bytes::from_static(b"hb"))).unwrap(),
        Incoming::Control
    );
}

#[test]
fn close_frame_is_close() {
    assert_eq!(decode(Message::Close(None)).unwrap(), Incoming::Close);
}

#[test]
fn encode_produces_text_frame() {
    let msg = encode(r#"{"type":"subscribe"}"#.to_string());
    assert_eq!(decode(msg).unwrap(), Incoming::Text(r#"{"type":"subscribe"}"#.to_string()));
}
