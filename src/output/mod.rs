//! Output module
//!
//! Turns decoded results into printable lines and writes them out.
//!
//! # Overview
//!
//! - `format_line` - pure, infallible rendering of one result
//! - `LineSink` - where the engine's drain task writes lines

mod formatter;
mod sink;

pub use formatter::{format_line, FormattedLine, OutputOptions};
pub use sink::{LineSink, WriterSink};
