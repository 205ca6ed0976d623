//! Task Card Component
//!
//! One task with its forward state step and a guarded delete.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{Task, TaskState};

#[component]
pub fn TaskCard(
    task: Task,
    /// Receives `(task id, next state)`
    on_advance: Callback<(u32, TaskState)>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = task.id;
    let state = task.state;
    let description = task.has_description().then(|| task.description.clone()).flatten();

    view! {
        <div class=if state.is_terminal() { "task-card done" } else { "task-card" }>
            <div class="task-card-header">
                <h3 class="task-title">{task.title.clone()}</h3>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=move |_| on_delete.run(id) />
            </div>

            {description.map(|text| view! { <p class="task-description">{text}</p> })}

            <div class="task-card-footer">
                <span class=format!("state-badge {}", state.css_class())>{state.label()}</span>
                // Completed is terminal: no further step offered
                {state.next().map(|next| view! {
                    <button class="advance-btn" on:click=move |_| on_advance.run((id, next))>
                        {format!("Move to {}", next)}
                    </button>
                })}
            </div>

            <div class="task-meta">
                <span>{format!("Created: {}", task.created_date())}</span>
            </div>
        </div>
    }
}
