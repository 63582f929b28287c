use chrono::NaiveDate;
use dovetail_core::datetime::{
    estimated_time_long, format_input_date, long_date, parse_input_date,
};
use dovetail_core::{Priority, Task};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

const CATEGORY_OPTIONS: [&str; 5] = ["Design", "Development", "Documentation", "Meeting", "Other"];

/// Inline-edit draft. Text fields stay strings until save so partial
/// input never corrupts the record.
#[derive(Clone, PartialEq)]
struct EditDraft {
    title: String,
    description: String,
    priority: Priority,
    due: String,
    category: String,
    estimated: String,
    error: Option<String>,
}

impl EditDraft {
    fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            due: format_input_date(task.due),
            category: task.category.clone(),
            estimated: task
                .estimated_minutes
                .map(|m| m.to_string())
                .unwrap_or_default(),
            error: None,
        }
    }

    fn apply_to(&self, task: &Task) -> Result<Task, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }

        let due = parse_input_date(&self.due).map_err(|err| format!("{err:#}"))?;

        let estimated_minutes = {
            let raw = self.estimated.trim();
            if raw.is_empty() {
                None
            } else {
                Some(
                    raw.parse::<u32>()
                        .map_err(|_| format!("invalid estimated minutes: {raw}"))?,
                )
            }
        };

        let mut updated = task.clone();
        updated.title = title.to_string();
        updated.description = self.description.trim().to_string();
        updated.priority = self.priority;
        updated.due = due;
        updated.category = self.category.clone();
        updated.estimated_minutes = estimated_minutes;
        Ok(updated)
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskDetailProps {
    pub task: Task,
    pub today: NaiveDate,
    pub on_update: Callback<Task>,
    pub on_delete: Callback<Uuid>,
    pub on_close: Callback<()>,
    pub on_subtask_add: Callback<(Uuid, String)>,
    pub on_subtask_toggle: Callback<(Uuid, Uuid)>,
    pub on_subtask_remove: Callback<(Uuid, Uuid)>,
}

#[function_component(TaskDetail)]
pub fn task_detail(props: &TaskDetailProps) -> Html {
    let editing = use_state(|| None::<EditDraft>);
    let subtask_input = use_state(String::new);

    let task = &props.task;
    let id = task.id;
    let overdue = task.is_overdue(props.today);
    let (done_subtasks, total_subtasks) = task.subtask_progress();
    let progress_pct = if total_subtasks > 0 {
        done_subtasks * 100 / total_subtasks
    } else {
        0
    };

    let start_edit = {
        let editing = editing.clone();
        let task = task.clone();
        Callback::from(move |_| editing.set(Some(EditDraft::from_task(&task))))
    };

    let cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let save_edit = {
        let editing = editing.clone();
        let task = task.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_| {
            let Some(draft) = (*editing).clone() else {
                return;
            };
            match draft.apply_to(&task) {
                Ok(updated) => {
                    on_update.emit(updated);
                    editing.set(None);
                }
                Err(message) => {
                    let mut draft = draft;
                    draft.error = Some(message);
                    editing.set(Some(draft));
                }
            }
        })
    };

    let on_close = props.on_close.clone();
    let on_close_click = Callback::from(move |_| on_close.emit(()));

    let on_delete = props.on_delete.clone();
    let on_delete_click = Callback::from(move |_| {
        let confirmed = web_sys::window()
            .and_then(|window| {
                window
                    .confirm_with_message("Are you sure you want to delete this task?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            on_delete.emit(id);
        }
    });

    let add_subtask = {
        let subtask_input = subtask_input.clone();
        let on_subtask_add = props.on_subtask_add.clone();
        Callback::from(move |_: ()| {
            let title = subtask_input.trim().to_string();
            if title.is_empty() {
                return;
            }
            on_subtask_add.emit((id, title));
            subtask_input.set(String::new());
        })
    };

    let on_subtask_keydown = {
        let add_subtask = add_subtask.clone();
        Callback::from(move |e: yew::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_subtask.emit(());
            }
        })
    };

    let on_subtask_input = {
        let subtask_input = subtask_input.clone();
        Callback::from(move |e: yew::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subtask_input.set(input.value());
        })
    };

    let edit_field = |apply: fn(&mut EditDraft, String)| {
        let editing = editing.clone();
        Callback::from(move |e: yew::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(mut draft) = (*editing).clone() {
                apply(&mut draft, input.value());
                draft.error = None;
                editing.set(Some(draft));
            }
        })
    };

    let in_edit = editing.is_some();

    html! {
        <div class="panel detail">
            <div class="detail-header">
                <h2>{ "Task Details" }</h2>
                <div class="detail-header-actions">
                    {
                        if !in_edit {
                            html! { <button class="btn ghost" onclick={start_edit}>{ "Edit" }</button> }
                        } else {
                            html! {}
                        }
                    }
                    <button class="btn ghost" onclick={on_close_click}>{ "✕" }</button>
                </div>
            </div>

            <div class="detail-body">
                {
                    if let Some(draft) = (*editing).clone() {
                        let on_title = edit_field(|d, v| d.title = v);
                        let on_due = edit_field(|d, v| d.due = v);
                        let on_estimated = edit_field(|d, v| d.estimated = v);

                        let on_description = {
                            let editing = editing.clone();
                            Callback::from(move |e: yew::InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                if let Some(mut draft) = (*editing).clone() {
                                    draft.description = area.value();
                                    draft.error = None;
                                    editing.set(Some(draft));
                                }
                            })
                        };
                        let on_priority = {
                            let editing = editing.clone();
                            Callback::from(move |e: yew::Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                if let (Some(mut draft), Some(priority)) =
                                    ((*editing).clone(), Priority::parse(&select.value()))
                                {
                                    draft.priority = priority;
                                    editing.set(Some(draft));
                                }
                            })
                        };
                        let on_category = {
                            let editing = editing.clone();
                            Callback::from(move |e: yew::Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                if let Some(mut draft) = (*editing).clone() {
                                    draft.category = select.value();
                                    editing.set(Some(draft));
                                }
                            })
                        };

                        html! {
                            <>
                                <div class="field">
                                    <label>{ "Title" }</label>
                                    <input value={draft.title.clone()} oninput={on_title} />
                                </div>
                                <div class="field">
                                    <label>{ "Description" }</label>
                                    <textarea
                                        value={draft.description.clone()}
                                        rows="4"
                                        oninput={on_description}
                                    />
                                </div>
                                <div class="field">
                                    <label>{ "Priority" }</label>
                                    <select onchange={on_priority}>
                                        {
                                            for [Priority::Low, Priority::Medium, Priority::High].into_iter().map(|p| html! {
                                                <option
                                                    value={p.storage_value()}
                                                    selected={draft.priority == p}
                                                >
                                                    { p.label() }
                                                </option>
                                            })
                                        }
                                    </select>
                                </div>
                                <div class="field">
                                    <label>{ "Due Date" }</label>
                                    <input type="date" value={draft.due.clone()} oninput={on_due} />
                                </div>
                                <div class="field">
                                    <label>{ "Estimated Time (minutes)" }</label>
                                    <input
                                        type="number"
                                        min="0"
                                        placeholder="Minutes"
                                        value={draft.estimated.clone()}
                                        oninput={on_estimated}
                                    />
                                </div>
                                <div class="field">
                                    <label>{ "Category" }</label>
                                    <select onchange={on_category}>
                                        {
                                            for CATEGORY_OPTIONS.iter().map(|category| html! {
                                                <option
                                                    value={*category}
                                                    selected={draft.category == *category}
                                                >
                                                    { *category }
                                                </option>
                                            })
                                        }
                                    </select>
                                </div>
                                {
                                    if let Some(error) = &draft.error {
                                        html! { <div class="form-error">{ error }</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="actions">
                                    <button class="btn primary" onclick={save_edit.clone()}>{ "Save" }</button>
                                    <button class="btn" onclick={cancel_edit.clone()}>{ "Cancel" }</button>
                                </div>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <div class="detail-title-line">
                                    <h3>{ &task.title }</h3>
                                    {
                                        if overdue {
                                            html! { <span class="badge urgent">{ "Overdue" }</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                <div class="kv">
                                    <strong>{ "Description" }</strong>
                                    <p>
                                        {
                                            if task.description.trim().is_empty() {
                                                "No description provided".to_string()
                                            } else {
                                                task.description.clone()
                                            }
                                        }
                                    </p>
                                </div>
                                <div class="kv">
                                    <strong>{ "Priority" }</strong>
                                    <span class={format!("badge priority-{}", task.priority.storage_value())}>
                                        { task.priority.label() }
                                    </span>
                                </div>
                                <div class="kv">
                                    <strong>{ "Due Date" }</strong>
                                    <span class={if overdue { "due overdue" } else { "due" }}>
                                        { long_date(task.due) }
                                        { if overdue { " (Overdue)" } else { "" } }
                                    </span>
                                </div>
                                <div class="kv">
                                    <strong>{ "Estimated Time" }</strong>
                                    <span>{ estimated_time_long(task.estimated_minutes) }</span>
                                </div>
                                <div class="kv">
                                    <strong>{ "Category" }</strong>
                                    <span class="badge">{ &task.category }</span>
                                </div>
                                <div class="kv">
                                    <strong>{ "Tags" }</strong>
                                    <div class="tag-row">
                                        {
                                            if task.tags.is_empty() {
                                                html! { <span class="muted">{ "—" }</span> }
                                            } else {
                                                html! {
                                                    <>
                                                        {
                                                            for task.tags.iter().map(|tag| html! {
                                                                <span class="badge tag">{ tag }</span>
                                                            })
                                                        }
                                                    </>
                                                }
                                            }
                                        }
                                    </div>
                                </div>
                            </>
                        }
                    }
                }

                <div class="kv">
                    <strong>{ format!("Subtasks ({done_subtasks}/{total_subtasks})") }</strong>
                    {
                        if total_subtasks > 0 {
                            html! {
                                <div class="subtask-progress">
                                    <div class="progress-track">
                                        <div class="progress-fill" style={format!("width:{progress_pct}%;")}></div>
                                    </div>
                                    <p class="muted">{ format!("{progress_pct}% complete") }</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        for task.subtasks.iter().map(|subtask| {
                            let subtask_id = subtask.id;
                            let on_toggle = props.on_subtask_toggle.clone();
                            let on_remove = props.on_subtask_remove.clone();
                            html! {
                                <div class="subtask-line">
                                    <input
                                        type="checkbox"
                                        checked={subtask.completed}
                                        onclick={move |_| on_toggle.emit((id, subtask_id))}
                                    />
                                    <span class={if subtask.completed { "struck muted" } else { "" }}>
                                        { &subtask.title }
                                    </span>
                                    <button
                                        class="chip-remove"
                                        onclick={move |_| on_remove.emit((id, subtask_id))}
                                    >
                                        { "×" }
                                    </button>
                                </div>
                            }
                        })
                    }
                    <div class="inline-entry">
                        <input
                            value={(*subtask_input).clone()}
                            placeholder="Add subtask..."
                            oninput={on_subtask_input}
                            onkeydown={on_subtask_keydown}
                        />
                        <button class="btn" onclick={move |_| add_subtask.emit(())}>{ "+" }</button>
                    </div>
                </div>

                <div class="kv">
                    <strong>{ "Attachments" }</strong>
                    {
                        if task.attachments.is_empty() {
                            html! { <span class="muted">{ "No attachments" }</span> }
                        } else {
                            html! {
                                <>
                                    {
                                        for task.attachments.iter().map(|attachment| html! {
                                            <div class="attachment-line">
                                                <span>{ &attachment.name }</span>
                                                <span class="muted">
                                                    { format!("({:.1} KB)", attachment.size_bytes as f64 / 1024.0) }
                                                </span>
                                            </div>
                                        })
                                    }
                                </>
                            }
                        }
                    }
                </div>

                <div class="kv">
                    <strong>{ "Created" }</strong>
                    <span>{ long_date(task.created) }</span>
                </div>
                <div class="kv">
                    <strong>{ "Status" }</strong>
                    <span>{ if task.completed { "Completed" } else { "Pending" } }</span>
                </div>
            </div>

            <div class="detail-footer">
                <button class="btn danger" onclick={on_delete_click}>{ "Delete Task" }</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use dovetail_core::{Subtask, TaskDraft};

    use super::{EditDraft, NaiveDate, Priority, Task};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sample_task() -> Task {
        Task::new(
            TaskDraft {
                title: "Write onboarding docs".to_string(),
                description: "Cover setup and first run".to_string(),
                priority: Priority::Low,
                due: date(2024, 1, 25),
                category: "Documentation".to_string(),
                tags: vec!["docs".to_string()],
                estimated_minutes: Some(30),
                subtasks: vec![Subtask::new("outline")],
            },
            date(2024, 1, 20),
        )
    }

    #[test]
    fn draft_mirrors_task_fields() {
        let draft = EditDraft::from_task(&sample_task());
        assert_eq!(draft.title, "Write onboarding docs");
        assert_eq!(draft.due, "2024-01-25");
        assert_eq!(draft.estimated, "30");
        assert_eq!(draft.error, None);
    }

    #[test]
    fn apply_rewrites_fields_but_keeps_target_identity() {
        let task = sample_task();
        let mut draft = EditDraft::from_task(&task);
        draft.title = "  Write onboarding guide  ".to_string();
        draft.due = "2024-02-01".to_string();
        draft.estimated = String::new();

        let updated = draft.apply_to(&task).expect("valid edit");
        assert_eq!(updated.title, "Write onboarding guide");
        assert_eq!(updated.due, date(2024, 2, 1));
        assert_eq!(updated.estimated_minutes, None);

        // identity and unedited state stay with the target record
        assert_eq!(updated.id, task.id);
        assert_eq!(updated.created, task.created);
        assert_eq!(updated.completed, task.completed);
        assert_eq!(updated.subtasks, task.subtasks);
        assert_eq!(updated.tags, task.tags);
    }

    #[test]
    fn apply_rejects_bad_input() {
        let task = sample_task();

        let mut draft = EditDraft::from_task(&task);
        draft.title = "   ".to_string();
        assert_eq!(draft.apply_to(&task).unwrap_err(), "Title is required");

        let mut draft = EditDraft::from_task(&task);
        draft.due = "soon".to_string();
        assert!(draft.apply_to(&task).unwrap_err().contains("invalid date"));

        let mut draft = EditDraft::from_task(&task);
        draft.estimated = "lots".to_string();
        assert!(
            draft
                .apply_to(&task)
                .unwrap_err()
                .contains("invalid estimated minutes")
        );
    }
}
