//! Line sinks
//!
//! The engine's drain task is the only writer; a sink is moved into it for
//! the duration of a run and handed back afterwards.

use super::formatter::FormattedLine;
use std::io::{self, Write};

/// Destination for result lines
pub trait LineSink: Send {
    /// Write one line
    fn write_line(&mut self, line: &FormattedLine) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes newline-terminated lines to any `io::Write`
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &FormattedLine) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl LineSink for Vec<FormattedLine> {
    fn write_line(&mut self, line: &FormattedLine) -> io::Result<()> {
        self.push(line.clone());
        Ok(())
    }
}
