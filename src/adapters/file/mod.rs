//! Report output
//!
//! Implements `ReportSink` for the markdown file and for stdout.

mod sink;

pub use sink::{MarkdownFileSink, StdoutSink};
