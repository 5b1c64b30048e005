//! Tests for the ranking engine

use std::cmp::Ordering;

use pmc_board::core::models::{Student, StudentEntry};
use pmc_board::core::services::{compare_progress, rank};

use crate::common::{ProgramBuilder, tasks};

fn ranked_ids(builder: ProgramBuilder) -> Vec<String> {
    let data = builder.build();
    let entries = data.entries().unwrap();
    rank(&entries).iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn test_completed_student_ranks_first() {
    let ids = ranked_ids(
        ProgramBuilder::new()
            .student("S2", Student::registered(tasks(&[false])))
            .student("S1", Student::registered(tasks(&[true]))),
    );
    assert_eq!(ids, ["S1", "S2"]);
}

#[test]
fn test_earlier_task_outweighs_later_tasks() {
    let first_only = Student::registered(tasks(&[true, false, false, false]));
    let rest = Student::registered(tasks(&[false, true, true, true]));
    assert_eq!(compare_progress(&first_only, &rest), Ordering::Less);
}

#[test]
fn test_equal_students_keep_input_order() {
    let ids = ranked_ids(
        ProgramBuilder::new()
            .student("c", Student::registered(tasks(&[true, false])))
            .student("a", Student::registered(tasks(&[true, false])))
            .student("b", Student::registered(tasks(&[true, false]))),
    );
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn test_unregistered_after_idle_registered() {
    let ids = ranked_ids(
        ProgramBuilder::new()
            .student("done", Student::unregistered(tasks(&[true, true])))
            .student("idle", Student::registered(tasks(&[false, false])))
            .student("half", Student::unregistered(tasks(&[true, false]))),
    );
    assert_eq!(ids, ["idle", "done", "half"]);
}

#[test]
fn test_unregistered_keep_input_order() {
    let a = Student::unregistered(tasks(&[false, false]));
    let b = Student::unregistered(tasks(&[true, true]));
    let entries = [
        StudentEntry { id: "a", student: &a },
        StudentEntry { id: "b", student: &b },
    ];
    let ids: Vec<_> = rank(&entries).iter().map(|e| e.id).collect();
    assert_eq!(ids, ["a", "b"]);
}
