#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tipfax_client::sink::{EscPosSink, ReceiptSink};

#[test]
fn receipt_bytes() {
    let mut sink = EscPosSink::new(Vec::new());
    sink.write_line("Tip from alice: 5.00 USD").unwrap();
    sink.write_line("Status: completed").unwrap();
    sink.finalize().unwrap();

    let mut expected = vec![0x1b, 0x40];
    expected.extend_from_slice(b"Tip from alice: 5.00 USD\n");
    expected.extend_from_slice(b"Status: completed\n");
    expected.extend_from_slice(&[0x1d, 0x56, 0x42, 0x00]);
    assert_eq!(sink.into_inner(), expected);
}

#[test]
fn control_bytes_are_stripped_from_text() {
    let mut sink = EscPosSink::new(Vec::new());
    sink.write_line("Message: hi\x1b@\x1dV there").unwrap();
    sink.finalize().unwrap();

    let out = sink.into_inner();
    assert_eq!(&out[2..out.len() - 4], "Message: hi@V there\n".as_bytes());
}

#[test]
fn each_receipt_starts_fresh() {
    let mut sink = EscPosSink::new(Vec::new());
    sink.write_line("a").unwrap();
    sink.finalize().unwrap();
    sink.write_line("b").unwrap();
    sink.finalize().unwrap();

    let out = sink.into_inner();
    let one: &[u8] = &[0x1b, 0x40, b'a', b'\n', 0x1d, 0x56, 0x42, 0x00];
    let two: &[u8] = &[0x1b, 0x40, b'b', b'\n', 0x1d, 0x56, 0x42, 0x00];
    assert_eq!(out, [one, two].concat());
}
