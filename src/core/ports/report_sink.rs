//! Report sink port
//!
//! Defines where a rendered board ends up.

/// Destination of a rendered board
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink: Send + Sync {
    /// Persist the full report, replacing any previous one
    fn write(&self, report: &str) -> anyhow::Result<()>;

    /// Human-readable description of the destination
    fn describe(&self) -> String;
}
