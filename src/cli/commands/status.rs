//! Status command - show the ranked board without writing it

use std::path::Path;

use anyhow::Context;

use pmc_board::adapters::json::JsonProgramSource;
use pmc_board::config::ReportConfig;
use pmc_board::core::ports::ProgramSource;
use pmc_board::core::services::build_report;
use pmc_board::output::{OutputMode, StatusResult, StudentSummary};

/// Show the ranked board summary
pub fn status(root: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = ReportConfig::load(root)?;
    let options = config.render_options()?;

    let data = JsonProgramSource::new(config.data_dir_in(root)).load()?;
    let report = build_report(&data, &options).context("failed to rank students")?;

    StatusResult {
        deadline: report.deadline,
        students: report.rows.iter().map(StudentSummary::from).collect(),
    }
    .render(mode);

    Ok(())
}
