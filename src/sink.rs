//! Output sink adapter.

use std::io::{self, Write};

/// A byte destination the renderer writes finished frames to.
///
/// Every `std::io::Write` is a sink: each emit writes the whole buffer and then
/// flushes, so a frame is either fully handed to the terminal or the caller sees
/// the error. Nothing is retried.
pub trait OutputSink {
    /// Write all of `bytes` and flush.
    fn emit(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<W: Write + ?Sized> OutputSink for W {
    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)?;
        self.flush()
    }
}
