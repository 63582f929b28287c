use dovetail_core::OverdueAlert;
use gloo::timers::future::TimeoutFuture;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, Properties, function_component, html, use_effect_with};

const AUTO_DISMISS_MS: u32 = 6_000;

#[derive(Properties, PartialEq)]
struct ToastProps {
    alert: OverdueAlert,
    on_dismiss: Callback<Uuid>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let id = props.alert.task_id;

    // One timer per toast, armed on mount.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                on_dismiss.emit(id);
            });
        });
    }

    let on_dismiss = props.on_dismiss.clone();

    html! {
        <div class="toast" onclick={move |_| on_dismiss.emit(id)}>
            <span class="toast-mark">{ "⚠" }</span>
            <div class="toast-body">
                <div class="toast-title">{ format!("\"{}\" is overdue", props.alert.title) }</div>
                <div class="toast-sub">{ format!("Due {}", props.alert.due.format("%Y-%m-%d")) }</div>
            </div>
            <span class="toast-close">{ "✕" }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastShelfProps {
    pub alerts: Vec<OverdueAlert>,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(ToastShelf)]
pub fn toast_shelf(props: &ToastShelfProps) -> Html {
    html! {
        <div class="toast-shelf">
            {
                for props.alerts.iter().cloned().map(|alert| {
                    let key = alert.task_id.to_string();
                    html! {
                        <Toast {key} {alert} on_dismiss={props.on_dismiss.clone()} />
                    }
                })
            }
        </div>
    }
}
