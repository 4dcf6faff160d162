use chrono::NaiveDate;

use crate::api::{Task, TaskId, TaskStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

/// The hardcoded dashboard tasks. Tasks are not persisted anywhere; the
/// comment API references them by id only.
pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task {
            id: TaskId(1),
            title: String::from("Design Landing Page"),
            description: String::from(
                "Create the high-fidelity UI/UX mockups for the new product \
                 landing page, focusing on conversion optimization.",
            ),
            assignee: String::from("John Doe"),
            due_date: date(2026, 1, 30),
            status: TaskStatus::InProgress,
        },
        Task {
            id: TaskId(2),
            title: String::from("Fix Login Bug"),
            description: String::from(
                "Investigate and resolve the authentication token expiry issue \
                 happening on iOS devices during the login flow.",
            ),
            assignee: String::from("Jane Smith"),
            due_date: date(2026, 1, 25),
            status: TaskStatus::Pending,
        },
        Task {
            id: TaskId(3),
            title: String::from("Write Unit Tests"),
            description: String::from(
                "Implement comprehensive unit tests for the user dashboard \
                 components to ensure 80% code coverage.",
            ),
            assignee: String::from("Alice Johnson"),
            due_date: date(2026, 2, 1),
            status: TaskStatus::Completed,
        },
    ]
}
