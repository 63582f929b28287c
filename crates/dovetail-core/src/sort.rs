use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::task::Task;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    DueDate,
    Priority,
    Created,
    Alphabetical,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::DueDate,
        SortOption::Priority,
        SortOption::Created,
        SortOption::Alphabetical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOption::DueDate => "Due Date",
            SortOption::Priority => "Priority",
            SortOption::Created => "Created",
            SortOption::Alphabetical => "Alphabetical",
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            SortOption::DueDate => "due-date",
            SortOption::Priority => "priority",
            SortOption::Created => "created",
            SortOption::Alphabetical => "alphabetical",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "due-date" => Some(SortOption::DueDate),
            "priority" => Some(SortOption::Priority),
            "created" => Some(SortOption::Created),
            "alphabetical" => Some(SortOption::Alphabetical),
            _ => None,
        }
    }
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::DueDate
    }
}

/// Total order for the list view. Ties break on case-insensitive title
/// then id so the order is stable across re-renders.
pub fn compare(a: &Task, b: &Task, sort: SortOption) -> Ordering {
    let primary = match sort {
        SortOption::DueDate => a.due.cmp(&b.due),
        SortOption::Priority => b.priority.weight().cmp(&a.priority.weight()),
        SortOption::Created => b.created.cmp(&a.created),
        SortOption::Alphabetical => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    };

    primary
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_tasks(tasks: &mut [Task], sort: SortOption) {
    tasks.sort_by(|a, b| compare(a, b, sort));
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{SortOption, sort_tasks};
    use crate::task::{Priority, Task, TaskDraft};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn task(title: &str, priority: Priority, due: NaiveDate, created: NaiveDate) -> Task {
        let mut task = Task::new(
            TaskDraft {
                title: title.to_string(),
                description: String::new(),
                priority,
                due,
                category: "Other".to_string(),
                tags: vec![],
                estimated_minutes: None,
                subtasks: vec![],
            },
            created,
        );
        task.created = created;
        task
    }

    fn fixture() -> Vec<Task> {
        vec![
            task("beta", Priority::Low, date(2024, 1, 28), date(2024, 1, 18)),
            task("Alpha", Priority::High, date(2024, 1, 25), date(2024, 1, 20)),
            task("gamma", Priority::Medium, date(2024, 1, 21), date(2024, 1, 19)),
        ]
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn due_date_sorts_ascending() {
        let mut tasks = fixture();
        sort_tasks(&mut tasks, SortOption::DueDate);
        assert_eq!(titles(&tasks), ["gamma", "Alpha", "beta"]);
    }

    #[test]
    fn priority_sorts_high_first() {
        let mut tasks = fixture();
        sort_tasks(&mut tasks, SortOption::Priority);
        assert_eq!(titles(&tasks), ["Alpha", "gamma", "beta"]);
    }

    #[test]
    fn created_sorts_newest_first() {
        let mut tasks = fixture();
        sort_tasks(&mut tasks, SortOption::Created);
        assert_eq!(titles(&tasks), ["Alpha", "gamma", "beta"]);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let mut tasks = fixture();
        sort_tasks(&mut tasks, SortOption::Alphabetical);
        assert_eq!(titles(&tasks), ["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn equal_keys_fall_back_to_title() {
        let created = date(2024, 1, 20);
        let due = date(2024, 1, 25);
        let mut tasks = vec![
            task("second", Priority::Medium, due, created),
            task("first", Priority::Medium, due, created),
        ];
        sort_tasks(&mut tasks, SortOption::Priority);
        assert_eq!(titles(&tasks), ["first", "second"]);
    }

    #[test]
    fn storage_value_round_trips() {
        for sort in SortOption::ALL {
            assert_eq!(SortOption::parse(sort.storage_value()), Some(sort));
        }
        assert_eq!(SortOption::parse("urgency"), None);
    }
}
