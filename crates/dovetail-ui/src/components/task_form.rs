use chrono::NaiveDate;
use dovetail_core::datetime::{format_input_date, parse_input_date};
use dovetail_core::{Priority, Subtask, TaskDraft};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{
    Callback, Html, Properties, TargetCast, UseStateHandle, function_component, html, use_state,
};

const CATEGORY_OPTIONS: [&str; 5] = ["Design", "Development", "Documentation", "Meeting", "Other"];

#[derive(Clone, PartialEq)]
struct FormDraft {
    title: String,
    description: String,
    priority: Priority,
    due: String,
    category: String,
    estimated: String,
    tag_input: String,
    tags: Vec<String>,
    subtask_input: String,
    subtasks: Vec<Subtask>,
    error: Option<String>,
}

impl FormDraft {
    fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            due: format_input_date(today),
            category: "Other".to_string(),
            estimated: String::new(),
            tag_input: String::new(),
            tags: vec![],
            subtask_input: String::new(),
            subtasks: vec![],
            error: None,
        }
    }
}

fn push_tag_unique(tags: &mut Vec<String>, tag: String) -> bool {
    let tag = tag.trim().to_string();
    if tag.is_empty() || tags.iter().any(|existing| *existing == tag) {
        return false;
    }
    tags.push(tag);
    true
}

/// Validate a draft into the record the book can take. The error text
/// lands next to the submit button.
fn build_task_draft(draft: &FormDraft) -> Result<TaskDraft, String> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }

    let due = parse_input_date(&draft.due).map_err(|err| format!("{err:#}"))?;

    let estimated_minutes = {
        let raw = draft.estimated.trim();
        if raw.is_empty() {
            None
        } else {
            Some(
                raw.parse::<u32>()
                    .map_err(|_| format!("invalid estimated minutes: {raw}"))?,
            )
        }
    };

    Ok(TaskDraft {
        title: title.to_string(),
        description: draft.description.trim().to_string(),
        priority: draft.priority,
        due,
        category: draft.category.clone(),
        tags: draft.tags.clone(),
        estimated_minutes,
        subtasks: draft.subtasks.clone(),
    })
}

fn edit_draft<F>(state: &UseStateHandle<FormDraft>, apply: F) -> Callback<yew::InputEvent>
where
    F: Fn(&mut FormDraft, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |e: yew::InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut draft = (*state).clone();
        apply(&mut draft, input.value());
        draft.error = None;
        state.set(draft);
    })
}

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    pub today: NaiveDate,
    pub on_submit: Callback<TaskDraft>,
    pub on_close: Callback<()>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let draft = use_state({
        let today = props.today;
        move || FormDraft::new(today)
    });

    let on_title = edit_draft(&draft, |d, v| d.title = v);
    let on_due = edit_draft(&draft, |d, v| d.due = v);
    let on_estimated = edit_draft(&draft, |d, v| d.estimated = v);
    let on_tag_input = edit_draft(&draft, |d, v| d.tag_input = v);
    let on_subtask_input = edit_draft(&draft, |d, v| d.subtask_input = v);

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: yew::InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.description = area.value();
            current.error = None;
            draft.set(current);
        })
    };

    let on_priority = {
        let draft = draft.clone();
        Callback::from(move |e: yew::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(priority) = Priority::parse(&select.value()) {
                let mut current = (*draft).clone();
                current.priority = priority;
                draft.set(current);
            }
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: yew::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.category = select.value();
            draft.set(current);
        })
    };

    let add_tag = {
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            let mut current = (*draft).clone();
            let tag = current.tag_input.clone();
            if push_tag_unique(&mut current.tags, tag) {
                current.tag_input.clear();
            }
            draft.set(current);
        })
    };

    let remove_tag = {
        let draft = draft.clone();
        Callback::from(move |tag: String| {
            let mut current = (*draft).clone();
            current.tags.retain(|existing| *existing != tag);
            draft.set(current);
        })
    };

    let add_subtask = {
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            let mut current = (*draft).clone();
            let title = current.subtask_input.trim().to_string();
            if title.is_empty() {
                return;
            }
            current.subtasks.push(Subtask::new(title));
            current.subtask_input.clear();
            draft.set(current);
        })
    };

    let remove_subtask = {
        let draft = draft.clone();
        Callback::from(move |id: uuid::Uuid| {
            let mut current = (*draft).clone();
            current.subtasks.retain(|subtask| subtask.id != id);
            draft.set(current);
        })
    };

    let on_tag_keydown = {
        let add_tag = add_tag.clone();
        Callback::from(move |e: yew::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_tag.emit(());
            }
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

    let on_submit_click = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        let today = props.today;
        Callback::from(move |_| {
            let current = (*draft).clone();
            match build_task_draft(&current) {
                Ok(task_draft) => {
                    tracing::debug!(title = %task_draft.title, "submitting new task");
                    on_submit.emit(task_draft);
                    draft.set(FormDraft::new(today));
                }
                Err(message) => {
                    let mut current = current;
                    current.error = Some(message);
                    draft.set(current);
                }
            }
        })
    };

    let on_close = props.on_close.clone();
    let on_close_click = Callback::from(move |_| on_close.emit(()));

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{ "Create New Task" }</h2>
                    <button class="btn ghost" onclick={on_close_click}>{ "✕" }</button>
                </div>

                <div class="field">
                    <label>{ "Title *" }</label>
                    <input
                        value={draft.title.clone()}
                        placeholder="Enter task title"
                        oninput={on_title}
                    />
                </div>

                <div class="field">
                    <label>{ "Description" }</label>
                    <textarea
                        value={draft.description.clone()}
                        placeholder="Enter task description"
                        rows="3"
                        oninput={on_description}
                    />
                </div>

                <div class="field-grid">
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
                </div>

                <div class="field-grid">
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
                    <div class="field">
                        <label>{ "Estimated Time (minutes)" }</label>
                        <input
                            type="number"
                            min="0"
                            placeholder="e.g. 60"
                            value={draft.estimated.clone()}
                            oninput={on_estimated}
                        />
                    </div>
                </div>

                <div class="field">
                    <label>{ "Tags" }</label>
                    <div class="inline-entry">
                        <input
                            value={draft.tag_input.clone()}
                            placeholder="Add a tag"
                            oninput={on_tag_input}
                            onkeydown={on_tag_keydown}
                        />
                        <button class="btn" onclick={move |_| add_tag.emit(())}>{ "Add" }</button>
                    </div>
                    <div class="tag-row">
                        {
                            for draft.tags.iter().cloned().map(|tag| {
                                let remove_tag = remove_tag.clone();
                                let tag_for_remove = tag.clone();
                                html! {
                                    <span class="badge tag">
                                        { &tag }
                                        <button
                                            class="chip-remove"
                                            onclick={move |_| remove_tag.emit(tag_for_remove.clone())}
                                        >
                                            { "×" }
                                        </button>
                                    </span>
                                }
                            })
                        }
                    </div>
                </div>

                <div class="field">
                    <label>{ "Subtasks" }</label>
                    <div class="inline-entry">
                        <input
                            value={draft.subtask_input.clone()}
                            placeholder="Add a subtask"
                            oninput={on_subtask_input}
                            onkeydown={on_subtask_keydown}
                        />
                        <button class="btn" onclick={move |_| add_subtask.emit(())}>{ "+" }</button>
                    </div>
                    {
                        for draft.subtasks.iter().map(|subtask| {
                            let remove_subtask = remove_subtask.clone();
                            let id = subtask.id;
                            html! {
                                <div class="subtask-line">
                                    <span>{ &subtask.title }</span>
                                    <button
                                        class="chip-remove"
                                        onclick={move |_| remove_subtask.emit(id)}
                                    >
                                        { "×" }
                                    </button>
                                </div>
                            }
                        })
                    }
                </div>

                {
                    if let Some(error) = &draft.error {
                        html! { <div class="form-error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }

                <div class="actions">
                    <button class="btn primary" onclick={on_submit_click}>{ "Create Task" }</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{FormDraft, NaiveDate, Priority, build_task_draft, push_tag_unique};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn push_tag_unique_trims_and_rejects_duplicates() {
        let mut tags = vec!["ui".to_string()];
        assert!(push_tag_unique(&mut tags, " design ".to_string()));
        assert_eq!(tags, vec!["ui".to_string(), "design".to_string()]);

        assert!(!push_tag_unique(&mut tags, "design".to_string()));
        assert!(!push_tag_unique(&mut tags, "   ".to_string()));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn build_rejects_blank_title() {
        let mut draft = FormDraft::new(date(2024, 1, 22));
        draft.title = "   ".to_string();
        assert_eq!(build_task_draft(&draft).unwrap_err(), "Title is required");
    }

    #[test]
    fn build_rejects_malformed_date() {
        let mut draft = FormDraft::new(date(2024, 1, 22));
        draft.title = "Ship the beta".to_string();
        draft.due = "01/22/2024".to_string();
        assert!(build_task_draft(&draft).unwrap_err().contains("invalid date"));
    }

    #[test]
    fn build_rejects_non_numeric_minutes() {
        let mut draft = FormDraft::new(date(2024, 1, 22));
        draft.title = "Ship the beta".to_string();
        draft.estimated = "an hour".to_string();
        assert!(
            build_task_draft(&draft)
                .unwrap_err()
                .contains("invalid estimated minutes")
        );
    }

    #[test]
    fn build_trims_and_carries_fields() {
        let mut draft = FormDraft::new(date(2024, 1, 22));
        draft.title = "  Ship the beta  ".to_string();
        draft.description = " release notes pending ".to_string();
        draft.tags = vec!["release".to_string()];
        draft.estimated = "45".to_string();

        let task_draft = build_task_draft(&draft).expect("valid draft");
        assert_eq!(task_draft.title, "Ship the beta");
        assert_eq!(task_draft.description, "release notes pending");
        assert_eq!(task_draft.priority, Priority::Medium);
        assert_eq!(task_draft.due, date(2024, 1, 22));
        assert_eq!(task_draft.tags, vec!["release".to_string()]);
        assert_eq!(task_draft.estimated_minutes, Some(45));
    }
}
