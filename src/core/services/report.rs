//! Report service - runs the whole board pipeline over loaded program state
//!
//! validate → rank → classify → render. [`build_report`] does no I/O; the
//! caller loads the [`ProgramData`] and decides where the text goes.
//! [`publish`] wires the same pipeline between a [`ProgramSource`] and a
//! [`ReportSink`].

use thiserror::Error;

use super::ranking::rank;
use super::renderer::{BoardRow, RenderOptions, build_rows, render_document};
use crate::core::models::{DataError, DeadlineError, ProgramData, Status};
use crate::core::ports::{ProgramSource, ReportSink};

/// Errors that stop a report from being built
#[derive(Debug, Error)]
pub enum ReportError {
    /// Program state is inconsistent
    #[error(transparent)]
    Data(#[from] DataError),

    /// Reward deadline could not be resolved
    #[error(transparent)]
    Deadline(#[from] DeadlineError),
}

/// A rendered board and the facts it was built from
#[derive(Debug, Clone)]
pub struct Report {
    /// Full markdown document
    pub text: String,
    /// Classified rows, in board order
    pub rows: Vec<BoardRow>,
    /// Number of task columns
    pub task_columns: usize,
    /// Deadline as shown in the document
    pub deadline: String,
}

impl Report {
    /// Number of registered students on the board
    #[must_use]
    pub fn registered(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.registration == Status::OnTime)
            .count()
    }
}

/// Build the board for a program
pub fn build_report(data: &ProgramData, options: &RenderOptions) -> Result<Report, ReportError> {
    data.validate()?;
    let deadline = data.reward_deadline(options.offset)?.format_in(options.offset);

    let entries = data.entries()?;
    let ranked = rank(&entries);
    let rows = build_rows(data, &ranked);
    let task_columns = data.task_count().unwrap_or(options.task_columns);

    log::debug!(
        "Ranked {} students ({} task columns, deadline {deadline})",
        rows.len(),
        task_columns
    );

    Ok(Report {
        text: render_document(&rows, &deadline, task_columns),
        rows,
        task_columns,
        deadline,
    })
}

/// Load program state, build the board and hand it to the sink
///
/// Nothing reaches the sink unless loading and rendering both succeed.
pub fn publish(
    source: &dyn ProgramSource,
    sink: &dyn ReportSink,
    options: &RenderOptions,
) -> anyhow::Result<Report> {
    let data = source.load()?;
    log::info!("Loaded {} students", data.roster.sequence.len());

    let report = build_report(&data, options)?;
    sink.write(&report.text)?;
    log::info!("Wrote board to {}", sink.describe());

    Ok(report)
}
