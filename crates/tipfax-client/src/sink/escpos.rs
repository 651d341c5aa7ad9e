//! ESC/POS receipt printer sink.
//!
//! Lines are buffered and flushed to the device as one write on `finalize`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use bytes::{BufMut, BytesMut};

use super::ReceiptSink;

/// ESC @ : initialize printer.
const INIT: &[u8] = &[0x1b, 0x40];
/// GS V 66 0 : feed to cutter and partial cut.
const FEED_AND_CUT: &[u8] = &[0x1d, 0x56, 0x42, 0x00];
const LF: u8 = 0x0a;

pub struct EscPosSink<W: Write + Send> {
    out: W,
    buf: BytesMut,
}

impl EscPosSink<File> {
    /// Open a printer device file such as `/dev/usb/lp0`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let f = OpenOptions::new().write(true).open(path)?;
        Ok(Self::new(f))
    }
}

impl<W: Write + Send> EscPosSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: BytesMut::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn begin_if_needed(&mut self) {
        if self.buf.is_empty() {
            self.buf.put_slice(INIT);
        }
    }
}

impl<W: Write + Send> ReceiptSink for EscPosSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.begin_if_needed();
        // control bytes inside user text would be read as printer commands
        for ch in line.chars().filter(|c| !c.is_control()) {
            let mut tmp = [0u8; 4];
            self.buf.put_slice(ch.encode_utf8(&mut tmp).as_bytes());
        }
        self.buf.put_u8(LF);
        Ok(())
    }

    fn finalize(&mut self) -> io::Result<()> {
        self.begin_if_needed();
        self.buf.put_slice(FEED_AND_CUT);
        let res = self.out.write_all(&self.buf).and_then(|_| self.out.flush());
        self.buf.clear();
        res
    }
}
