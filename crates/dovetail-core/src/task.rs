use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric weight used by the priority comparator: high outranks
    /// medium outranks low.
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub kind: String,
    pub size_bytes: u64,
}

/// Everything a new task needs except the identity and creation date,
/// which the book assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due: NaiveDate,
    pub category: String,
    pub tags: Vec<String>,
    pub estimated_minutes: Option<u32>,
    pub subtasks: Vec<Subtask>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub completed: bool,

    pub priority: Priority,

    pub due: NaiveDate,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    pub created: NaiveDate,

    #[serde(default)]
    pub subtasks: Vec<Subtask>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,

    #[serde(default)]
    pub estimated_minutes: Option<u32>,

    #[serde(default)]
    pub reminder: Option<NaiveDate>,
}

impl Task {
    pub fn new(draft: TaskDraft, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            completed: false,
            priority: draft.priority,
            due: draft.due,
            category: draft.category,
            tags: draft.tags,
            created: today,
            subtasks: draft.subtasks,
            attachments: vec![],
            estimated_minutes: draft.estimated_minutes,
            reminder: None,
        }
    }

    /// A task is overdue when it is incomplete and its due date is
    /// strictly before `today`. Due today is not overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due < today
    }

    /// `(completed, total)` over the subtask list.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Priority, Subtask, Task, TaskDraft};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn draft(title: &str, due: NaiveDate) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            due,
            category: "Other".to_string(),
            tags: vec![],
            estimated_minutes: None,
            subtasks: vec![],
        }
    }

    #[test]
    fn overdue_is_strictly_before_today() {
        let today = date(2024, 1, 22);
        let mut task = Task::new(draft("x", date(2024, 1, 21)), today);
        assert!(task.is_overdue(today));

        task.due = today;
        assert!(!task.is_overdue(today));

        task.due = date(2024, 1, 21);
        task.completed = true;
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn subtask_progress_counts_completed() {
        let today = date(2024, 1, 22);
        let mut task = Task::new(draft("x", today), today);
        assert_eq!(task.subtask_progress(), (0, 0));

        task.subtasks = vec![
            Subtask::new("a"),
            Subtask::new("b"),
            Subtask::new("c"),
        ];
        task.subtasks[0].completed = true;
        task.subtasks[2].completed = true;
        assert_eq!(task.subtask_progress(), (2, 3));
    }

    #[test]
    fn priority_weight_ordering() {
        assert!(Priority::High.weight() > Priority::Medium.weight());
        assert!(Priority::Medium.weight() > Priority::Low.weight());
    }

    #[test]
    fn task_round_trips_through_json_with_iso_dates() {
        let today = date(2024, 1, 20);
        let mut task = Task::new(draft("Design new landing page", date(2024, 1, 25)), today);
        task.tags = vec!["ui".to_string(), "design".to_string()];
        task.estimated_minutes = Some(90);

        let raw = serde_json::to_string(&task).expect("serialize");
        assert!(raw.contains("\"due\":\"2024-01-25\""));
        assert!(raw.contains("\"priority\":\"medium\""));

        let back: Task = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(back, task);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let raw = r#"{
            "id": "3e0f47b4-9c39-4d0b-97b9-0d4e5d4f2f11",
            "title": "Review pull requests",
            "completed": true,
            "priority": "low",
            "due": "2024-01-22",
            "created": "2024-01-19"
        }"#;
        let task: Task = serde_json::from_str(raw).expect("deserialize minimal record");
        assert!(task.subtasks.is_empty());
        assert!(task.attachments.is_empty());
        assert_eq!(task.estimated_minutes, None);
        assert_eq!(task.reminder, None);
    }
}
