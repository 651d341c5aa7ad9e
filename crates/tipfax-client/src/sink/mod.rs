//! Receipt sinks.
//!
//! The dispatcher hands every extracted tip to an optional `ReceiptSink` as a
//! few text lines followed by a finalize signal. Sinks are called synchronously
//! from the receive loop, so a slow or blocked printer stalls dispatch until the
//! call returns.

pub mod escpos;

use std::io;

pub use escpos::EscPosSink;

pub trait ReceiptSink: Send {
    /// Append one line of text to the current receipt.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Finish the current receipt (print and cut).
    fn finalize(&mut self) -> io::Result<()>;
}
