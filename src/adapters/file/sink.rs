//! Report sinks

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::core::ports::ReportSink;

/// Writes the board to a markdown file, replacing its previous contents
#[derive(Debug, Clone)]
pub struct MarkdownFileSink {
    path: PathBuf,
}

impl MarkdownFileSink {
    /// Create a sink writing to `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for MarkdownFileSink {
    fn write(&self, report: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, report)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Prints the board to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write(&self, report: &str) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(report.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
