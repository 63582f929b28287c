use std::collections::BTreeSet;

use chrono::Local;
use dovetail_core::{
    FilterOption, OverdueAlert, SortOption, Task, TaskBook, TaskCounts, TaskDraft,
    collect_overdue_alerts, filter_visible_tasks, prune_seen, seed, sort_tasks,
};
use uuid::Uuid;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};

use crate::components::{Sidebar, TaskDetail, TaskList, ToastShelf};
use crate::storage::{load_filter_option, load_sort_option, save_filter_option, save_sort_option};

#[function_component(App)]
pub fn app() -> Html {
    let today = Local::now().date_naive();

    let book = use_state(|| TaskBook::new(seed::sample_tasks(Local::now().date_naive())));
    let selected = use_state(|| None::<Uuid>);
    let active_filter = use_state(load_filter_option);
    let sort_by = use_state(load_sort_option);
    let search = use_state(String::new);
    let form_open = use_state(|| false);
    let toasts = use_state(Vec::<OverdueAlert>::new);
    let seen_overdue = use_state(BTreeSet::<Uuid>::new);

    // Overdue pass: after first render and after every book change,
    // raise a toast for each newly overdue task. Tasks leave the seen
    // set once they stop being overdue, so lapsing again re-toasts.
    {
        let toasts = toasts.clone();
        let seen_overdue = seen_overdue.clone();
        use_effect_with((*book).clone(), move |book| {
            let mut seen = (*seen_overdue).clone();
            prune_seen(book.tasks(), today, &mut seen);

            let alerts = collect_overdue_alerts(book.tasks(), today, &seen);
            if !alerts.is_empty() {
                tracing::info!(count = alerts.len(), "raising overdue toasts");
                let mut shelf = (*toasts).clone();
                for alert in &alerts {
                    seen.insert(alert.task_id);
                    shelf.push(alert.clone());
                }
                toasts.set(shelf);
            }
            seen_overdue.set(seen);
        });
    }

    let visible_tasks = {
        let mut tasks = filter_visible_tasks(book.tasks(), *active_filter, &search, today);
        sort_tasks(&mut tasks, *sort_by);
        tasks
    };
    let counts = TaskCounts::tally(book.tasks(), today);
    let selected_task = selected.and_then(|id| book.find(id)).cloned();

    let on_filter = {
        let active_filter = active_filter.clone();
        Callback::from(move |filter: FilterOption| {
            save_filter_option(filter);
            active_filter.set(filter);
        })
    };

    let on_sort = {
        let sort_by = sort_by.clone();
        Callback::from(move |sort: SortOption| {
            save_sort_option(sort);
            sort_by.set(sort);
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |query: String| search.set(query))
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: Uuid| selected.set(Some(id)))
    };

    let on_close_detail = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let on_toggle = {
        let book = book.clone();
        Callback::from(move |id: Uuid| {
            let mut next = (*book).clone();
            if let Err(err) = next.toggle(id) {
                tracing::warn!(error = %format!("{err:#}"), "toggle failed");
                return;
            }
            book.set(next);
        })
    };

    let on_add = {
        let book = book.clone();
        let form_open = form_open.clone();
        Callback::from(move |draft: TaskDraft| {
            let mut next = (*book).clone();
            next.add(draft, today);
            book.set(next);
            form_open.set(false);
        })
    };

    let on_update = {
        let book = book.clone();
        Callback::from(move |task: Task| {
            let mut next = (*book).clone();
            if let Err(err) = next.update(task) {
                tracing::warn!(error = %format!("{err:#}"), "update failed");
                return;
            }
            book.set(next);
        })
    };

    let on_delete = {
        let book = book.clone();
        let selected = selected.clone();
        Callback::from(move |id: Uuid| {
            let mut next = (*book).clone();
            if let Err(err) = next.remove(id) {
                tracing::warn!(error = %format!("{err:#}"), "delete failed");
                return;
            }
            book.set(next);
            if *selected == Some(id) {
                selected.set(None);
            }
        })
    };

    let on_subtask_add = {
        let book = book.clone();
        Callback::from(move |(task_id, title): (Uuid, String)| {
            let mut next = (*book).clone();
            if let Err(err) = next.add_subtask(task_id, &title) {
                tracing::warn!(error = %format!("{err:#}"), "add subtask failed");
                return;
            }
            book.set(next);
        })
    };

    let on_subtask_toggle = {
        let book = book.clone();
        Callback::from(move |(task_id, subtask_id): (Uuid, Uuid)| {
            let mut next = (*book).clone();
            if let Err(err) = next.toggle_subtask(task_id, subtask_id) {
                tracing::warn!(error = %format!("{err:#}"), "toggle subtask failed");
                return;
            }
            book.set(next);
        })
    };

    let on_subtask_remove = {
        let book = book.clone();
        Callback::from(move |(task_id, subtask_id): (Uuid, Uuid)| {
            let mut next = (*book).clone();
            if let Err(err) = next.remove_subtask(task_id, subtask_id) {
                tracing::warn!(error = %format!("{err:#}"), "remove subtask failed");
                return;
            }
            book.set(next);
        })
    };

    let on_open_form = {
        let form_open = form_open.clone();
        Callback::from(move |_: ()| form_open.set(true))
    };

    let on_close_form = {
        let form_open = form_open.clone();
        Callback::from(move |_: ()| form_open.set(false))
    };

    let on_dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| {
            let shelf: Vec<OverdueAlert> = toasts
                .iter()
                .filter(|alert| alert.task_id != id)
                .cloned()
                .collect();
            toasts.set(shelf);
        })
    };

    html! {
        <div class="layout">
            <Sidebar
                active={*active_filter}
                {counts}
                on_filter={on_filter}
            />

            <TaskList
                tasks={visible_tasks}
                {today}
                selected={*selected}
                search={(*search).clone()}
                sort_by={*sort_by}
                form_open={*form_open}
                on_select={on_select}
                on_toggle={on_toggle}
                on_search={on_search}
                on_sort={on_sort}
                on_open_form={on_open_form}
                on_close_form={on_close_form}
                on_add={on_add}
            />

            {
                if let Some(task) = selected_task {
                    // Keyed by task id so switching selection remounts
                    // the panel and drops any in-progress edit draft.
                    let key = task.id.to_string();
                    html! {
                        <TaskDetail
                            {key}
                            {task}
                            {today}
                            on_update={on_update}
                            on_delete={on_delete}
                            on_close={on_close_detail}
                            on_subtask_add={on_subtask_add}
                            on_subtask_toggle={on_subtask_toggle}
                            on_subtask_remove={on_subtask_remove}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <ToastShelf alerts={(*toasts).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
