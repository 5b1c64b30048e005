//! Report renderer - turns ranked students into the markdown board
//!
//! The document is the preamble (with the deadline and the legend filled in),
//! the summary table, and the curated table of other rewards.

use chrono::FixedOffset;
use serde::Serialize;

use super::classifier::{classify, classify_registration};
use crate::core::models::{Deadline, ProgramData, Status, StudentEntry};

const PREAMBLE: &str = include_str!("../../templates/preamble.md");
const OTHER_REWARDS: &str = include_str!("../../templates/other_rewards.md");

/// Options that shape the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Offset the deadline is shown in
    pub offset: FixedOffset,
    /// Task column count used when there are no students to derive it from
    pub task_columns: usize,
}

/// One classified row of the summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRow {
    /// 1-based position on the board
    pub rank: usize,
    /// Student id
    pub id: String,
    /// Registration cell
    pub registration: Status,
    /// One cell per task, in task order
    pub tasks: Vec<Status>,
    /// Reward total
    pub reward: f64,
}

/// Classify every cell of the ranked students
#[must_use]
pub fn build_rows(data: &ProgramData, ranked: &[StudentEntry<'_>]) -> Vec<BoardRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(idx, entry)| BoardRow {
            rank: idx + 1,
            id: entry.id.to_string(),
            registration: classify_registration(entry.student.registered),
            // Non-rewardable tasks always render as outdated
            tasks: entry
                .student
                .tasks
                .iter()
                .map(|t| classify(t.completed, data.has_unmerged(entry.id, &t.name), !t.rewardable))
                .collect(),
            reward: data.reward_total(entry.id),
        })
        .collect()
}

/// Render the status legend, one bullet per symbol
#[must_use]
pub fn render_legend() -> String {
    let last = Status::LEGEND.len() - 1;
    Status::LEGEND
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let end = if i == last { "。" } else { "；" };
            format!("- {}——{}{end}", s.symbol(), s.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the summary table
#[must_use]
pub fn render_table(rows: &[BoardRow], task_columns: usize) -> String {
    let task_headers: String = (1..=task_columns).map(|n| format!(" T{n} |")).collect();
    let task_aligns = " :---: |".repeat(task_columns);

    let body = rows
        .iter()
        .map(|row| {
            let cells: String = row.tasks.iter().map(|s| format!(" {s} |")).collect();
            format!(
                "| {} | [`{id}`]({id}) | {} |{cells} {} |",
                row.rank,
                row.registration,
                format_amount(row.reward),
                id = row.id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "| 序号 | 学员 | 报名 |{task_headers} 奖励 |\n| ---: | --- | :---: |{task_aligns} ---: |\n{body}"
    )
}

/// Assemble the full document from classified rows
#[must_use]
pub fn render_document(rows: &[BoardRow], deadline: &str, task_columns: usize) -> String {
    let preamble = PREAMBLE
        .replace("{deadline}", deadline)
        .replace("{legend}", &render_legend());

    format!("{preamble}\n{}\n\n{OTHER_REWARDS}", render_table(rows, task_columns))
}

/// Render the board for ranked students
#[must_use]
pub fn render_report(
    data: &ProgramData,
    ranked: &[StudentEntry<'_>],
    deadline: &Deadline,
    options: &RenderOptions,
) -> String {
    let task_columns = data.task_count().unwrap_or(options.task_columns);
    render_document(
        &build_rows(data, ranked),
        &deadline.format_in(options.offset),
        task_columns,
    )
}

/// Format a reward total; whole amounts drop the fraction
#[must_use]
pub fn format_amount(amount: f64) -> String {
    // -0.0 displays as "-0"
    if amount == 0.0 {
        return "0".to_string();
    }
    format!("{amount}")
}
