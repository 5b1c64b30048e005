//! Output formatting for human and JSON modes
//!
//! This module provides structured command results that can be rendered
//! either as human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Status;
use crate::core::services::BoardRow;
use crate::core::services::renderer::format_amount;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of generating the board
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Where the board was written
    pub output: String,
    /// Number of students on the board
    pub students: usize,
    /// Number of registered students
    pub registered: usize,
    /// Number of task columns
    pub task_columns: usize,
    /// Deadline as shown in the board
    pub deadline: String,
    /// UTC offset the deadline is shown at
    pub utc_offset: String,
}

/// Per-student line of the status overview
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    /// 1-based board position
    pub rank: usize,
    /// Student id
    pub id: String,
    /// Whether the student registered
    pub registered: bool,
    /// Tasks merged
    pub completed: usize,
    /// Tasks submitted but not merged
    pub unmerged: usize,
    /// One status per task
    pub tasks: Vec<Status>,
    /// Reward total
    pub reward: f64,
}

/// Result of the status command
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Deadline as shown in the board
    pub deadline: String,
    /// Students in board order
    pub students: Vec<StudentSummary>,
}

impl From<&BoardRow> for StudentSummary {
    fn from(row: &BoardRow) -> Self {
        Self {
            rank: row.rank,
            id: row.id.clone(),
            registered: row.registration == Status::OnTime,
            completed: row
                .tasks
                .iter()
                .filter(|s| matches!(s, Status::OnTime | Status::Late))
                .count(),
            unmerged: row.tasks.iter().filter(|s| **s == Status::Unmerged).count(),
            tasks: row.tasks.clone(),
            reward: row.reward,
        }
    }
}

impl GenerateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Wrote {}", self.output);
        println!(
            "  {} students ({} registered), {} task columns",
            self.students, self.registered, self.task_columns
        );
        println!("  Reward deadline: {} (UTC{})", self.deadline, self.utc_offset);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Reward deadline: {}", self.deadline);
        println!();

        if self.students.is_empty() {
            println!("Students: none");
            return;
        }

        let header = format!("{:>4}  {:<24} {:>4} {:>9}  Tasks", "#", "Student", "Reg", "Reward");
        println!("{}", header.bold());
        for s in &self.students {
            let cells: String = s.tasks.iter().map(|t| t.symbol()).collect();
            let id = if s.registered { s.id.normal() } else { s.id.dimmed() };
            println!(
                "{:>4}  {:<24} {:>4} {:>9}  {}",
                s.rank,
                id,
                if s.registered { "yes" } else { "no" },
                format_amount(s.reward),
                cells
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
