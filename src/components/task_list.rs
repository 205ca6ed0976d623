//! Task List Component
//!
//! Filters the parent's task snapshot by state and renders a card per task.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::filter::StateFilter;
use crate::models::{Task, TaskState};

#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    filter: ReadSignal<StateFilter>,
    set_filter: WriteSignal<StateFilter>,
    #[prop(into)] on_advance: Callback<(u32, TaskState)>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let visible = Memo::new(move |_| tasks.with(|all| filter.get().apply(all)));

    view! {
        <div class="task-list">
            <div class="task-list-header">
                <h2>{move || format!("Your Tasks ({})", visible.with(|v| v.len()))}</h2>
                <select
                    class="state-filter"
                    prop:value=move || filter.get().label()
                    on:change=move |ev| {
                        if let Some(selected) = StateFilter::from_label(&event_target_value(&ev)) {
                            set_filter.set(selected);
                        }
                    }
                >
                    {StateFilter::OPTIONS
                        .iter()
                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || {
                let shown = visible.get();
                if shown.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>{filter.get().empty_message()}</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="task-grid">
                            {shown
                                .into_iter()
                                .map(|task| view! { <TaskCard task=task on_advance=on_advance on_delete=on_delete /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
