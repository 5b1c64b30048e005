//! Student model
//!
//! A student is one row of the status board: a registration flag and an
//! ordered list of task records. Task order is positional and must line up
//! across every student in a roster.

use serde::{Deserialize, Deserializer, Serialize};

/// A student as stored in `students.json` under `people`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Whether enrollment information was submitted
    #[serde(default, deserialize_with = "flag")]
    pub registered: bool,

    /// Task records, in program order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// One task record of a student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task name, used as the key into the unmerged markers
    pub name: String,

    /// Whether the task's pull request was merged
    #[serde(default, deserialize_with = "flag")]
    pub completed: bool,

    /// Whether completing the task earns a reward
    #[serde(default, deserialize_with = "flag")]
    pub rewardable: bool,
}

impl Student {
    /// Create a registered student with the given tasks
    #[must_use]
    pub const fn registered(tasks: Vec<Task>) -> Self {
        Self {
            registered: true,
            tasks,
        }
    }

    /// Create an unregistered student with the given tasks
    #[must_use]
    pub const fn unregistered(tasks: Vec<Task>) -> Self {
        Self {
            registered: false,
            tasks,
        }
    }
}

impl Task {
    /// Create a task record
    #[must_use]
    pub fn new(name: impl Into<String>, completed: bool, rewardable: bool) -> Self {
        Self {
            name: name.into(),
            completed,
            rewardable,
        }
    }
}

/// Boolean flag that also accepts an explicit `null`
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
