//! Ranking engine - orders students for the board
//!
//! Registered students come first, ordered by task progress. Unregistered
//! students follow in input order and never enter the comparison.

use std::cmp::Ordering;

use crate::core::models::{Student, StudentEntry};

/// Compare two students by their first diverging task
///
/// Tasks are compared position by position; the first position where exactly
/// one of the two completed the task decides, and the one who completed it
/// ranks first. This is not a count: finishing task 1 beats finishing tasks
/// 2 through 9.
///
/// Both task lists must have the same length. Extra tasks on either side are
/// not looked at.
#[must_use]
pub fn compare_progress(a: &Student, b: &Student) -> Ordering {
    a.tasks
        .iter()
        .zip(&b.tasks)
        .find(|(x, y)| x.completed != y.completed)
        .map_or(Ordering::Equal, |(x, _)| {
            if x.completed {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        })
}

/// Order students for the board
///
/// The sort is stable: registered students that compare equal keep their input
/// order.
#[must_use]
pub fn rank<'a>(entries: &[StudentEntry<'a>]) -> Vec<StudentEntry<'a>> {
    let (mut registered, unregistered): (Vec<_>, Vec<_>) =
        entries.iter().copied().partition(|e| e.student.registered);

    registered.sort_by(|a, b| compare_progress(a.student, b.student));
    registered.extend(unregistered);
    registered
}
