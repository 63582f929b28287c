//! Task domain for the Dovetail single-page app: records, filtering,
//! sorting, overdue detection, and the in-memory task book. Pure and
//! natively testable; the wasm UI crate consumes it directly.

pub mod alert;
pub mod book;
pub mod datetime;
pub mod filter;
pub mod seed;
pub mod sort;
pub mod task;

pub use alert::{OverdueAlert, collect_overdue_alerts, prune_seen};
pub use book::TaskBook;
pub use filter::{FilterOption, TaskCounts, filter_visible_tasks};
pub use sort::{SortOption, sort_tasks};
pub use task::{Attachment, Priority, Subtask, Task, TaskDraft};
