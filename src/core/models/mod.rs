//! Domain models for pmc-board
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Student`] / [`Task`] - A board row and its task records
//! - [`Status`] - The symbol shown in a board cell
//! - [`Deadline`] - The reward deadline
//! - [`ProgramData`] - Read-only context bundling all program state

mod deadline;
mod program;
mod status;
mod student;

pub use deadline::{DEADLINE_FORMAT, Deadline, DeadlineError, RawDeadline};
pub use program::{
    DataError, Metadata, ProgramData, RewardMap, RewardRecord, Roster, StudentEntry, TaskMetadata,
    UnmergedMap, is_truthy,
};
pub use status::Status;
pub use student::{Student, Task};
