use chrono::NaiveDate;
use dovetail_core::{SortOption, Task, TaskDraft};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

use super::{TaskForm, TaskListRow};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub today: NaiveDate,
    pub selected: Option<Uuid>,
    pub search: String,
    pub sort_by: SortOption,
    pub form_open: bool,
    pub on_select: Callback<Uuid>,
    pub on_toggle: Callback<Uuid>,
    pub on_search: Callback<String>,
    pub on_sort: Callback<SortOption>,
    pub on_open_form: Callback<()>,
    pub on_close_form: Callback<()>,
    pub on_add: Callback<TaskDraft>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    let on_search = props.on_search.clone();
    let oninput = Callback::from(move |e: yew::InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_search.emit(input.value());
    });

    let on_sort = props.on_sort.clone();
    let onchange = Callback::from(move |e: yew::Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match SortOption::parse(&select.value()) {
            Some(sort) => on_sort.emit(sort),
            None => tracing::warn!(value = %select.value(), "unknown sort option selected"),
        }
    });

    let on_open_form = props.on_open_form.clone();

    html! {
        <div class="panel list">
            <div class="list-header">
                <div class="list-title-line">
                    <h1>{ "Tasks" }</h1>
                    <button class="btn primary" onclick={move |_| on_open_form.emit(())}>
                        { "+ Add Task" }
                    </button>
                </div>

                <div class="list-controls">
                    <input
                        class="search"
                        placeholder="Search tasks..."
                        value={props.search.clone()}
                        {oninput}
                    />
                    <select class="sort-select" value={props.sort_by.storage_value()} {onchange}>
                        {
                            for SortOption::ALL.into_iter().map(|sort| html! {
                                <option
                                    value={sort.storage_value()}
                                    selected={props.sort_by == sort}
                                >
                                    { sort.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
            </div>

            <div class="list-body">
                {
                    if props.tasks.is_empty() {
                        html! {
                            <div class="empty">
                                <div class="empty-glyph">{ "📝" }</div>
                                <h3>{ "No tasks found" }</h3>
                                <p>{ "Create your first task to get started" }</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                {
                                    for props.tasks.iter().cloned().map(|task| {
                                        let selected = props.selected == Some(task.id);
                                        html! {
                                            <TaskListRow
                                                {task}
                                                today={props.today}
                                                {selected}
                                                on_select={props.on_select.clone()}
                                                on_toggle={props.on_toggle.clone()}
                                            />
                                        }
                                    })
                                }
                            </>
                        }
                    }
                }
            </div>

            {
                if props.form_open {
                    html! {
                        <TaskForm
                            today={props.today}
                            on_submit={props.on_add.clone()}
                            on_close={props.on_close_form.clone()}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
