//! Status classifier - maps a cell's facts to its board symbol

use crate::core::models::Status;

/// Classify a board cell
///
/// * `completed` - the pull request was merged
/// * `unmerged` - a pull request was submitted and is still open
/// * `outdated` - the merge does not earn a reward
#[must_use]
pub const fn classify(completed: bool, unmerged: bool, outdated: bool) -> Status {
    if !completed {
        return if unmerged {
            Status::Unmerged
        } else {
            Status::Pending
        };
    }

    if outdated { Status::Late } else { Status::OnTime }
}

/// Classify the registration cell of a student
#[must_use]
pub const fn classify_registration(registered: bool) -> Status {
    classify(registered, false, false)
}
