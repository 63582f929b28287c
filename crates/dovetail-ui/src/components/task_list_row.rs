use chrono::NaiveDate;
use dovetail_core::Task;
use dovetail_core::datetime::{estimated_time_text, friendly_due};
use uuid::Uuid;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
    pub task: Task,
    pub today: NaiveDate,
    pub selected: bool,
    pub on_select: Callback<Uuid>,
    pub on_toggle: Callback<Uuid>,
}

#[function_component(TaskListRow)]
pub fn task_list_row(props: &TaskListRowProps) -> Html {
    let id = props.task.id;
    let overdue = props.task.is_overdue(props.today);
    let (done_subtasks, total_subtasks) = props.task.subtask_progress();

    let on_select = props.on_select.clone();
    let on_toggle = props.on_toggle.clone();

    let row_class = classes!(
        "row",
        props.selected.then_some("selected"),
        overdue.then_some("overdue"),
        props.task.completed.then_some("done"),
    );
    let priority_class = format!("badge priority-{}", props.task.priority.storage_value());

    let due_label = friendly_due(props.task.due, props.today);
    let progress_pct = if total_subtasks > 0 {
        done_subtasks * 100 / total_subtasks
    } else {
        0
    };

    html! {
        <div class={row_class} onclick={move |_| on_select.emit(id)}>
            <input
                type="checkbox"
                class="toggle"
                checked={props.task.completed}
                onclick={move |e: yew::MouseEvent| {
                    e.stop_propagation();
                    on_toggle.emit(id);
                }}
            />

            <div class="row-body">
                <div class="row-title">
                    <span class={if props.task.completed { "title struck" } else { "title" }}>
                        { &props.task.title }
                    </span>
                    {
                        if overdue {
                            html! { <span class="overdue-mark" title="Overdue">{ "⚠" }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                {
                    if props.task.description.trim().is_empty() {
                        html! {}
                    } else {
                        html! { <div class="row-desc">{ &props.task.description }</div> }
                    }
                }

                {
                    if total_subtasks > 0 {
                        html! {
                            <div class="subtask-progress">
                                <div class="subtask-progress-label">
                                    <span>{ "Subtasks" }</span>
                                    <span>{ format!("{done_subtasks}/{total_subtasks}") }</span>
                                </div>
                                <div class="progress-track">
                                    <div class="progress-fill" style={format!("width:{progress_pct}%;")}></div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="row-meta">
                    <div class="row-badges">
                        <span class={priority_class}>{ props.task.priority.label() }</span>
                        <span class="badge">{ &props.task.category }</span>
                        {
                            if let Some(minutes) = props.task.estimated_minutes {
                                html! { <span class="badge">{ estimated_time_text(minutes) }</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <span class={if overdue { "due overdue" } else { "due" }}>
                        { due_label }
                        { if overdue { " (Overdue)" } else { "" } }
                    </span>
                </div>
            </div>
        </div>
    }
}
