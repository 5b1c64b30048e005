//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (state files, report output).
//!
//! Implementations live in the `adapters` module.

mod program_source;
mod report_sink;

pub use program_source::ProgramSource;
pub use report_sink::ReportSink;

#[cfg(test)]
pub use program_source::MockProgramSource;
#[cfg(test)]
pub use report_sink::MockReportSink;
