use dovetail_core::{FilterOption, TaskCounts};
use yew::{Callback, Html, Properties, function_component, html};

const CATEGORIES: [&str; 4] = ["Design", "Development", "Documentation", "Meeting"];

const SHORTCUTS: [(&str, &str); 5] = [
    ("New task", "⌘N"),
    ("Search", "⌘F"),
    ("All tasks", "⌘1"),
    ("Today", "⌘2"),
    ("Overdue", "⌘3"),
];

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: FilterOption,
    pub counts: TaskCounts,
    pub on_filter: Callback<FilterOption>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <div class="panel sidebar">
            <div class="header">{ "Dovetail" }</div>
            <nav class="nav">
                {
                    for FilterOption::ALL.into_iter().map(|filter| {
                        let count = props.counts.for_filter(filter);
                        let active = props.active == filter;
                        let urgent = filter == FilterOption::Overdue && count > 0;
                        let class = match (active, urgent) {
                            (true, _) => "item active",
                            (false, true) => "item urgent",
                            (false, false) => "item",
                        };
                        let on_filter = props.on_filter.clone();
                        html! {
                            <div class={class} onclick={move |_| on_filter.emit(filter)}>
                                <span class="item-label">{ filter.label() }</span>
                                <span class={if urgent { "badge urgent" } else { "badge" }}>{ count }</span>
                            </div>
                        }
                    })
                }
            </nav>

            <div class="section">
                <div class="section-title">{ "Categories" }</div>
                {
                    for CATEGORIES.iter().map(|category| html! {
                        <div class="item muted">
                            <span class="dot"></span>
                            { *category }
                        </div>
                    })
                }
            </div>

            <div class="section">
                <div class="section-title">{ "Shortcuts" }</div>
                {
                    for SHORTCUTS.iter().map(|(label, keys)| html! {
                        <div class="shortcut">
                            <span>{ *label }</span>
                            <kbd>{ *keys }</kbd>
                        </div>
                    })
                }
            </div>
        </div>
    }
}
