use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::task::Task;

/// One toast-worthy event: a task that has slipped past its due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueAlert {
    pub task_id: Uuid,
    pub title: String,
    pub due: NaiveDate,
}

/// Collect alerts for overdue tasks not already in `seen`. The caller
/// owns `seen` and inserts the returned ids, so each task toasts at
/// most once until the caller clears its entry (on completion or
/// reschedule).
pub fn collect_overdue_alerts(
    tasks: &[Task],
    today: NaiveDate,
    seen: &BTreeSet<Uuid>,
) -> Vec<OverdueAlert> {
    let mut alerts = Vec::new();

    for task in tasks {
        if !task.is_overdue(today) {
            continue;
        }
        if seen.contains(&task.id) {
            continue;
        }

        alerts.push(OverdueAlert {
            task_id: task.id,
            title: task.title.clone(),
            due: task.due,
        });
    }

    debug!(count = alerts.len(), "collected overdue alerts");
    alerts
}

/// Drop `seen` entries for tasks that are no longer overdue, so a task
/// that lapses again raises a fresh alert.
pub fn prune_seen(tasks: &[Task], today: NaiveDate, seen: &mut BTreeSet<Uuid>) {
    seen.retain(|id| {
        tasks
            .iter()
            .any(|task| task.id == *id && task.is_overdue(today))
    });
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use super::{collect_overdue_alerts, prune_seen};
    use crate::task::{Priority, Task, TaskDraft};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn task(title: &str, due: NaiveDate, today: NaiveDate) -> Task {
        Task::new(
            TaskDraft {
                title: title.to_string(),
                description: String::new(),
                priority: Priority::Medium,
                due,
                category: "Other".to_string(),
                tags: vec![],
                estimated_minutes: None,
                subtasks: vec![],
            },
            today,
        )
    }

    #[test]
    fn alerts_only_for_unseen_overdue_tasks() {
        let today = date(2024, 1, 22);
        let tasks = vec![
            task("late", date(2024, 1, 20), today),
            task("on time", date(2024, 1, 23), today),
        ];

        let mut seen = BTreeSet::new();
        let first = collect_overdue_alerts(&tasks, today, &seen);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].title, "late");

        seen.insert(first[0].task_id);
        let second = collect_overdue_alerts(&tasks, today, &seen);
        assert!(second.is_empty());
    }

    #[test]
    fn completing_then_lapsing_again_re_alerts() {
        let today = date(2024, 1, 22);
        let mut tasks = vec![task("late", date(2024, 1, 20), today)];

        let mut seen = BTreeSet::new();
        let alerts = collect_overdue_alerts(&tasks, today, &seen);
        seen.insert(alerts[0].task_id);

        tasks[0].completed = true;
        prune_seen(&tasks, today, &mut seen);
        assert!(seen.is_empty());

        tasks[0].completed = false;
        let again = collect_overdue_alerts(&tasks, today, &seen);
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn rescheduled_task_leaves_the_seen_set() {
        let today = date(2024, 1, 22);
        let mut tasks = vec![task("late", date(2024, 1, 20), today)];

        let mut seen = BTreeSet::new();
        seen.insert(tasks[0].id);

        tasks[0].due = date(2024, 1, 25);
        prune_seen(&tasks, today, &mut seen);
        assert!(seen.is_empty());
    }
}
