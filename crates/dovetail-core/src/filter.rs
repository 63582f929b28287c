use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::task::Task;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterOption {
    All,
    Today,
    Overdue,
    Completed,
    Pending,
}

impl FilterOption {
    pub const ALL: [FilterOption; 5] = [
        FilterOption::All,
        FilterOption::Today,
        FilterOption::Overdue,
        FilterOption::Pending,
        FilterOption::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterOption::All => "All Tasks",
            FilterOption::Today => "Today",
            FilterOption::Overdue => "Overdue",
            FilterOption::Completed => "Completed",
            FilterOption::Pending => "Pending",
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            FilterOption::All => "all",
            FilterOption::Today => "today",
            FilterOption::Overdue => "overdue",
            FilterOption::Completed => "completed",
            FilterOption::Pending => "pending",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(FilterOption::All),
            "today" => Some(FilterOption::Today),
            "overdue" => Some(FilterOption::Overdue),
            "completed" => Some(FilterOption::Completed),
            "pending" => Some(FilterOption::Pending),
            _ => None,
        }
    }
}

impl Default for FilterOption {
    fn default() -> Self {
        FilterOption::All
    }
}

/// Free-text match: case-insensitive substring of `query` against the
/// task's title, description, or any tag. An empty query matches
/// everything.
fn matches_query(task: &Task, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }

    task.title.to_lowercase().contains(&q)
        || task.description.to_lowercase().contains(&q)
        || task.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
}

fn matches_filter(task: &Task, filter: FilterOption, today: NaiveDate) -> bool {
    match filter {
        FilterOption::All => true,
        FilterOption::Today => task.due == today,
        FilterOption::Overdue => task.is_overdue(today),
        FilterOption::Completed => task.completed,
        FilterOption::Pending => !task.completed,
    }
}

pub fn matches(task: &Task, filter: FilterOption, query: &str, today: NaiveDate) -> bool {
    let ok = matches_query(task, query) && matches_filter(task, filter, today);
    trace!(task = %task.id, ?filter, query, ok, "filter evaluation");
    ok
}

/// Single pass over the collection, preserving input order. The output
/// is always a subset of the input.
pub fn filter_visible_tasks(
    tasks: &[Task],
    filter: FilterOption,
    query: &str,
    today: NaiveDate,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches(task, filter, query, today))
        .cloned()
        .collect()
}

/// Sidebar badge counts. Computed over the whole collection, ignoring
/// the active search query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub today: usize,
    pub overdue: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskCounts {
    pub fn tally(tasks: &[Task], today: NaiveDate) -> Self {
        let mut counts = TaskCounts {
            all: tasks.len(),
            ..TaskCounts::default()
        };

        for task in tasks {
            if task.due == today {
                counts.today += 1;
            }
            if task.is_overdue(today) {
                counts.overdue += 1;
            }
            if task.completed {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
        }

        counts
    }

    pub fn for_filter(&self, filter: FilterOption) -> usize {
        match filter {
            FilterOption::All => self.all,
            FilterOption::Today => self.today,
            FilterOption::Overdue => self.overdue,
            FilterOption::Completed => self.completed,
            FilterOption::Pending => self.pending,
        }
    }
}
