mod sidebar;
mod task_detail;
mod task_form;
mod task_list;
mod task_list_row;
mod toast_shelf;

pub use sidebar::Sidebar;
pub use task_detail::TaskDetail;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use toast_shelf::ToastShelf;
