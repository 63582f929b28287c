use chrono::{Days, NaiveDate};

use crate::task::{Priority, Subtask, Task, TaskDraft};

fn shift(today: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        today.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(today)
}

/// The starter collection shown on first load. Dates are placed
/// relative to `today` so the Today and Overdue views, the overdue
/// toasts, and the subtask progress bar all have material immediately.
pub fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    let mut design = Task::new(
        TaskDraft {
            title: "Design new landing page".to_string(),
            description: "Create a modern and responsive landing page for the new product launch"
                .to_string(),
            priority: Priority::High,
            due: shift(today, 5),
            category: "Design".to_string(),
            tags: vec!["ui".to_string(), "design".to_string(), "landing".to_string()],
            estimated_minutes: Some(180),
            subtasks: vec![],
        },
        shift(today, -1),
    );
    design.created = shift(today, -1);

    let mut review = Task::new(
        TaskDraft {
            title: "Review pull requests".to_string(),
            description: "Review and merge pending pull requests from the development team"
                .to_string(),
            priority: Priority::Medium,
            due: shift(today, -3),
            category: "Development".to_string(),
            tags: vec!["code".to_string(), "review".to_string()],
            estimated_minutes: None,
            subtasks: vec![],
        },
        shift(today, -4),
    );
    review.created = shift(today, -4);
    review.completed = true;

    let mut docs = Task::new(
        TaskDraft {
            title: "Update documentation".to_string(),
            description: "Update API documentation with new endpoints and examples".to_string(),
            priority: Priority::Low,
            due: shift(today, -2),
            category: "Documentation".to_string(),
            tags: vec!["docs".to_string(), "api".to_string()],
            estimated_minutes: Some(60),
            subtasks: vec![],
        },
        shift(today, -6),
    );
    docs.created = shift(today, -6);

    let mut standup = Task::new(
        TaskDraft {
            title: "Team standup meeting".to_string(),
            description: "Daily standup meeting with the development team".to_string(),
            priority: Priority::Medium,
            due: today,
            category: "Meeting".to_string(),
            tags: vec!["meeting".to_string(), "team".to_string()],
            estimated_minutes: Some(15),
            subtasks: vec![
                Subtask::new("Collect blockers"),
                Subtask::new("Post agenda"),
            ],
        },
        shift(today, -1),
    );
    standup.created = shift(today, -1);
    if let Some(first) = standup.subtasks.first_mut() {
        first.completed = true;
    }

    vec![design, review, docs, standup]
}
