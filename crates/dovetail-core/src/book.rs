use anyhow::anyhow;
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::task::{Subtask, Task, TaskDraft};

/// The in-memory task collection. Every mutation is synchronous and
/// the UI re-derives its views from `tasks()` after each one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBook {
    tasks: Vec<Task>,
}

impl TaskBook {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn find_mut(&mut self, id: Uuid) -> anyhow::Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| anyhow!("task not found: {id}"))
    }

    /// New tasks go to the head of the list, newest first.
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn add(&mut self, draft: TaskDraft, today: NaiveDate) -> Uuid {
        let task = Task::new(draft, today);
        let id = task.id;
        self.tasks.insert(0, task);
        info!(%id, count = self.tasks.len(), "added task");
        id
    }

    #[tracing::instrument(skip(self), fields(%id))]
    pub fn toggle(&mut self, id: Uuid) -> anyhow::Result<()> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        info!(completed = task.completed, "toggled task");
        Ok(())
    }

    /// Replace the record whose id matches `updated`.
    #[tracing::instrument(skip(self, updated), fields(id = %updated.id))]
    pub fn update(&mut self, updated: Task) -> anyhow::Result<()> {
        let task = self.find_mut(updated.id)?;
        *task = updated;
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(%id))]
    pub fn remove(&mut self, id: Uuid) -> anyhow::Result<()> {
        let idx = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| anyhow!("task not found: {id}"))?;
        self.tasks.remove(idx);
        info!(count = self.tasks.len(), "removed task");
        Ok(())
    }

    #[tracing::instrument(skip(self, title), fields(%task_id))]
    pub fn add_subtask(&mut self, task_id: Uuid, title: &str) -> anyhow::Result<Uuid> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("subtask title cannot be empty"));
        }

        let task = self.find_mut(task_id)?;
        let subtask = Subtask::new(trimmed);
        let id = subtask.id;
        task.subtasks.push(subtask);
        Ok(id)
    }

    #[tracing::instrument(skip(self), fields(%task_id, %subtask_id))]
    pub fn toggle_subtask(&mut self, task_id: Uuid, subtask_id: Uuid) -> anyhow::Result<()> {
        let task = self.find_mut(task_id)?;
        let subtask = task
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or_else(|| anyhow!("subtask not found: {subtask_id}"))?;
        subtask.completed = !subtask.completed;
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(%task_id, %subtask_id))]
    pub fn remove_subtask(&mut self, task_id: Uuid, subtask_id: Uuid) -> anyhow::Result<()> {
        let task = self.find_mut(task_id)?;
        let idx = task
            .subtasks
            .iter()
            .position(|s| s.id == subtask_id)
            .ok_or_else(|| anyhow!("subtask not found: {subtask_id}"))?;
        task.subtasks.remove(idx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::TaskBook;
    use crate::task::{Priority, TaskDraft};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            due: date(2024, 1, 25),
            category: "Other".to_string(),
            tags: vec![],
            estimated_minutes: None,
            subtasks: vec![],
        }
    }

    #[test]
    fn add_prepends_and_stamps_creation_date() {
        let today = date(2024, 1, 20);
        let mut book = TaskBook::default();
        book.add(draft("first"), today);
        let id = book.add(draft("second"), today);

        assert_eq!(book.len(), 2);
        assert_eq!(book.tasks()[0].id, id);
        assert_eq!(book.tasks()[0].created, today);
    }

    #[test]
    fn toggle_flips_completion_both_ways() {
        let today = date(2024, 1, 20);
        let mut book = TaskBook::default();
        let id = book.add(draft("x"), today);

        book.toggle(id).expect("toggle on");
        assert!(book.find(id).expect("present").completed);
        book.toggle(id).expect("toggle off");
        assert!(!book.find(id).expect("present").completed);
    }

    #[test]
    fn update_replaces_matching_record() {
        let today = date(2024, 1, 20);
        let mut book = TaskBook::default();
        let id = book.add(draft("before"), today);

        let mut edited = book.find(id).expect("present").clone();
        edited.title = "after".to_string();
        edited.priority = Priority::High;
        book.update(edited).expect("update");

        let task = book.find(id).expect("present");
        assert_eq!(task.title, "after");
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn remove_deletes_and_reports_unknown_ids() {
        let today = date(2024, 1, 20);
        let mut book = TaskBook::default();
        let id = book.add(draft("x"), today);

        book.remove(id).expect("remove");
        assert!(book.is_empty());

        let err = book.remove(id).expect_err("double remove fails");
        assert!(err.to_string().contains("task not found"));
        assert!(book.toggle(Uuid::new_v4()).is_err());
    }

    #[test]
    fn subtask_lifecycle() {
        let today = date(2024, 1, 20);
        let mut book = TaskBook::default();
        let id = book.add(draft("x"), today);

        assert!(book.add_subtask(id, "   ").is_err());

        let sub = book.add_subtask(id, "  write tests ").expect("add subtask");
        assert_eq!(book.find(id).expect("present").subtasks[0].title, "write tests");

        book.toggle_subtask(id, sub).expect("toggle subtask");
        assert_eq!(book.find(id).expect("present").subtask_progress(), (1, 1));

        book.remove_subtask(id, sub).expect("remove subtask");
        assert!(book.find(id).expect("present").subtasks.is_empty());
        assert!(book.remove_subtask(id, sub).is_err());
    }
}
