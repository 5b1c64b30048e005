//! Generate the member board

use std::path::Path;

use anyhow::Context;

use pmc_board::adapters::file::{MarkdownFileSink, StdoutSink};
use pmc_board::adapters::json::JsonProgramSource;
use pmc_board::config::ReportConfig;
use pmc_board::core::ports::ReportSink;
use pmc_board::core::services::report::publish;
use pmc_board::output::{GenerateResult, OutputMode};

/// Regenerate `members/readme.md` (or print it with `to_stdout`)
pub fn generate(root: &Path, to_stdout: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = ReportConfig::load(root)?;
    let options = config.render_options()?;

    let source = JsonProgramSource::new(config.data_dir_in(root));
    let sink: Box<dyn ReportSink> = if to_stdout {
        Box::new(StdoutSink)
    } else {
        Box::new(MarkdownFileSink::new(config.output_in(root)))
    };

    let report = publish(&source, sink.as_ref(), &options)
        .with_context(|| format!("failed to generate board from {}", source.data_dir().display()))?;

    // The board itself went to stdout; keep it clean
    if to_stdout {
        return Ok(());
    }

    GenerateResult {
        output: sink.describe(),
        students: report.rows.len(),
        registered: report.registered(),
        task_columns: report.task_columns,
        deadline: report.deadline,
        utc_offset: options.offset.to_string(),
    }
    .render(mode);

    Ok(())
}
