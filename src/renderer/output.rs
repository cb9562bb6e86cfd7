//! Frame output.
//!
//! The compositor does not talk to a terminal itself. It hands each finished
//! frame to a [`FrameSink`]:
//! - [`TerminalSink`] writes to stdout through crossterm
//! - [`OutputBuffer`] keeps frames in memory (tests, capture, piping)

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::Print;

/// Destination for serialized frames.
pub trait FrameSink {
    /// Write one frame and make it visible.
    fn write_frame(&mut self, frame: &str) -> io::Result<()>;
}

// =============================================================================
// OutputBuffer
// =============================================================================

/// A sink that accumulates everything written to it.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: String,
    frames: usize,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: String::with_capacity(capacity),
            frames: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of frames written since creation or the last [`clear`](Self::clear).
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Clear the buffer without deallocating.
    pub fn clear(&mut self) {
        self.data.clear();
        self.frames = 0;
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Write the accumulated output to `writer` and clear the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(self.data.as_bytes())?;
        writer.flush()?;
        self.clear();
        Ok(())
    }
}

impl FrameSink for OutputBuffer {
    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.data.push_str(frame);
        self.frames += 1;
        Ok(())
    }
}

// =============================================================================
// TerminalSink
// =============================================================================

/// A sink that prints frames to a writer, stdout by default.
pub struct TerminalSink<W: Write = io::Stdout> {
    out: W,
}

impl TerminalSink {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        queue!(self.out, Print(frame))?;
        self.out.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_buffer_accumulates() {
        let mut buffer = OutputBuffer::new();
        assert!(buffer.is_empty());

        buffer.write_frame("ab\n").unwrap();
        buffer.write_frame("cd\n").unwrap();
        assert_eq!(buffer.as_str(), "ab\ncd\n");
        assert_eq!(buffer.frames(), 2);
        assert_eq!(buffer.len(), 6);
    }

    #[test]
    fn test_output_buffer_flush_to() {
        let mut buffer = OutputBuffer::with_capacity(16);
        buffer.write_frame("frame\n").unwrap();

        let mut out = Vec::new();
        buffer.flush_to(&mut out).unwrap();
        assert_eq!(out, b"frame\n");
        assert!(buffer.is_empty());
        assert_eq!(buffer.frames(), 0);
    }

    #[test]
    fn test_terminal_sink_writes_frame_verbatim() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.write_frame(" ABC \n").unwrap();
        assert_eq!(sink.into_inner(), b" ABC \n");
    }
}
