//! Task Form Component
//!
//! Collapsible form for creating a task. Emits the request to the parent,
//! never calls the API itself.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::NewTask;

/// Local form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub expanded: bool,
}

impl TaskDraft {
    pub fn expand(&mut self) {
        self.expanded = true;
    }

    /// Clear and collapse without emitting
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Turn the draft into a creation request, then clear and collapse.
    /// A blank title emits nothing and leaves the draft as is. Text is sent as typed.
    pub fn submit(&mut self) -> Option<NewTask> {
        if self.title.trim().is_empty() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(NewTask {
            title: draft.title,
            description: draft.description,
        })
    }
}

#[component]
pub fn TaskForm(#[prop(into)] on_submit: Callback<NewTask>) -> impl IntoView {
    let draft = RwSignal::new(TaskDraft::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(request) = draft.try_update(|d| d.submit()).flatten() {
            on_submit.run(request);
        }
    };

    view! {
        <Show
            when=move || draft.with(|d| d.expanded)
            fallback=move || view! {
                <button class="add-task-btn" on:click=move |_| draft.update(|d| d.expand())>
                    "+ Add New Task"
                </button>
            }
        >
            <form class="task-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Task title *"
                    autofocus=true
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.title = value);
                    }
                />
                <textarea
                    rows="3"
                    placeholder="Description (optional)"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                ></textarea>
                <div class="task-form-actions">
                    <button type="submit" class="primary-btn">"Create Task"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| draft.update(|d| d.cancel())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
