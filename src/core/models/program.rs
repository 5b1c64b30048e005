//! Program state
//!
//! [`ProgramData`] bundles the four state files of a program into one
//! read-only context. It is loaded once per run and passed down by reference.

use std::collections::HashMap;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Deadline, DeadlineError, RawDeadline, Student};

/// Errors raised when program state breaks its own invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// `sequence` names a student missing from `people`
    #[error("student {0:?} is listed in sequence but missing from people")]
    UnknownStudent(String),

    /// Two students carry a different number of tasks
    #[error("student {id:?} has {found} tasks, expected {expected} (as {reference:?})")]
    TaskCountMismatch {
        /// Offending student
        id: String,
        /// Reference student
        reference: String,
        /// Task count of the reference student
        expected: usize,
        /// Task count of the offending student
        found: usize,
    },

    /// Tasks at the same position carry different names
    #[error("student {id:?} has task {found:?} at position {index}, expected {expected:?}")]
    TaskNameMismatch {
        /// Offending student
        id: String,
        /// Zero-based task position
        index: usize,
        /// Task name of the reference student
        expected: String,
        /// Task name of the offending student
        found: String,
    },
}

/// Contents of `students.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Students keyed by id
    pub people: HashMap<String, Student>,
    /// Student ids in input order
    pub sequence: Vec<String>,
}

/// One entry of `rewards.json`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardRecord {
    /// Total reward amount
    #[serde(default)]
    pub total: Option<f64>,
}

/// Contents of `rewards.json`; a `null` entry counts as no reward
pub type RewardMap = HashMap<String, Option<RewardRecord>>;

/// Contents of `unmerged.json`: student id, then task name, then marker
pub type UnmergedMap = HashMap<String, HashMap<String, serde_json::Value>>;

/// Contents of `metadata.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Task section
    pub task: TaskMetadata,
}

/// Task section of `metadata.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMetadata {
    /// Last moment a merged task still earns its reward
    #[serde(rename = "rewardDeadline")]
    pub reward_deadline: RawDeadline,
}

/// A student paired with its id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentEntry<'a> {
    /// Student id
    pub id: &'a str,
    /// Student record
    pub student: &'a Student,
}

/// Read-only program state for a single run
#[derive(Debug, Clone)]
pub struct ProgramData {
    /// Students and their input order
    pub roster: Roster,
    /// Reward totals
    pub rewards: RewardMap,
    /// Unmerged pull request markers
    pub unmerged: UnmergedMap,
    /// Program metadata
    pub metadata: Metadata,
}

impl ProgramData {
    /// Look up a student by id
    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.roster.people.get(id)
    }

    /// Students in `sequence` order
    pub fn entries(&self) -> Result<Vec<StudentEntry<'_>>, DataError> {
        self.roster
            .sequence
            .iter()
            .map(|id| {
                self.student(id)
                    .map(|student| StudentEntry { id: id.as_str(), student })
                    .ok_or_else(|| DataError::UnknownStudent(id.clone()))
            })
            .collect()
    }

    /// Reward total of a student, 0 when absent
    #[must_use]
    pub fn reward_total(&self, id: &str) -> f64 {
        match self.rewards.get(id).copied().flatten().and_then(|r| r.total) {
            Some(total) if total != 0.0 => total,
            _ => 0.0,
        }
    }

    /// Whether a pull request for the task is waiting to be merged
    #[must_use]
    pub fn has_unmerged(&self, id: &str, task: &str) -> bool {
        self.unmerged
            .get(id)
            .and_then(|tasks| tasks.get(task))
            .is_some_and(is_truthy)
    }

    /// Task count shared by every student, `None` when the roster is empty
    #[must_use]
    pub fn task_count(&self) -> Option<usize> {
        self.roster
            .sequence
            .first()
            .and_then(|id| self.student(id))
            .map(|s| s.tasks.len())
    }

    /// Resolve the reward deadline
    pub fn reward_deadline(&self, offset: FixedOffset) -> Result<Deadline, DeadlineError> {
        Deadline::resolve(&self.metadata.task.reward_deadline, offset)
    }

    /// Check that every listed student exists and that task lists line up
    ///
    /// The first student in `sequence` is the reference: every other student
    /// must carry the same number of tasks with the same names, position by
    /// position. Ranking compares tasks by index, so a mismatch would compare
    /// unrelated tasks.
    pub fn validate(&self) -> Result<(), DataError> {
        let entries = self.entries()?;
        let Some((reference, rest)) = entries.split_first() else {
            return Ok(());
        };

        for entry in rest {
            let expected = reference.student.tasks.len();
            let found = entry.student.tasks.len();
            if expected != found {
                return Err(DataError::TaskCountMismatch {
                    id: entry.id.to_string(),
                    reference: reference.id.to_string(),
                    expected,
                    found,
                });
            }

            let mismatch = reference
                .student
                .tasks
                .iter()
                .zip(&entry.student.tasks)
                .position(|(a, b)| a.name != b.name);
            if let Some(index) = mismatch {
                return Err(DataError::TaskNameMismatch {
                    id: entry.id.to_string(),
                    index,
                    expected: reference.student.tasks[index].name.clone(),
                    found: entry.student.tasks[index].name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Loose truthiness of a JSON marker: everything but `false`, `null`, `0` and `""`
#[must_use]
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
