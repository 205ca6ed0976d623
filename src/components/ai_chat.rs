//! AI Chat Panel Component
//!
//! Relays free text to the AI endpoint and asks the parent to reload tasks
//! when the reply reports a successful mutation.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::chat::{ChatMessage, Role, Transcript};
use crate::error::ApiError;
use crate::models::AiReply;

/// Append the outcome, then ask the parent to reload when the reply reports a mutation
fn settle_reply(transcript: RwSignal<Transcript>, outcome: Result<AiReply, ApiError>, on_tasks_changed: Callback<()>) {
    let reload = transcript.try_update(|t| t.settle(outcome)).unwrap_or(false);
    if reload {
        on_tasks_changed.run(());
    }
}

#[component]
pub fn AiChat(#[prop(into)] on_tasks_changed: Callback<()>) -> impl IntoView {
    let client = use_api();

    let transcript = RwSignal::new(Transcript::new());
    let (input, set_input) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let end_ref = NodeRef::<html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        transcript.track();
        pending.track();
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    let send = move |ev: SubmitEvent| {
        ev.prevent_default();
        // The disabled control is the only guard against double submission
        if pending.get_untracked() {
            return;
        }
        let command = input.get_untracked().trim().to_string();
        if command.is_empty() {
            return;
        }

        set_input.set(String::new());
        transcript.update(|t| t.push_user(&command));
        set_pending.set(true);

        let client = client.clone();
        spawn_local(async move {
            log::debug!("[CHAT] Sending command");
            let outcome = client.send_command(&command).await;
            set_pending.set(false);
            settle_reply(transcript, outcome, on_tasks_changed);
        });
    };

    let messages = move || {
        transcript.with(|t| t.messages().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <div class="ai-chat">
            <div class="ai-chat-header">
                <h2>"AI Assistant"</h2>
                <p class="subtitle">"Describe what you want done"</p>
            </div>

            <div class="ai-chat-messages">
                // Append-only, so the index is a stable key
                <For
                    each=messages
                    key=|(idx, _)| *idx
                    children=move |(_, message)| view! { <ChatBubble message=message /> }
                />

                <Show when=move || pending.get()>
                    <div class="chat-row assistant">
                        <div class="chat-typing">
                            <span class="dot"></span>
                            <span class="dot"></span>
                            <span class="dot"></span>
                        </div>
                    </div>
                </Show>

                <div node_ref=end_ref></div>
            </div>

            <form class="ai-chat-input" on:submit=send>
                <input
                    type="text"
                    placeholder="Type a command..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    disabled=move || pending.get()
                />
                <button
                    type="submit"
                    class="primary-btn"
                    disabled=move || pending.get() || input.with(|s| s.trim().is_empty())
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let row_class = match message.role {
        Role::User => "chat-row user",
        Role::Assistant => "chat-row assistant",
    };
    let bubble_class = message.css_class();
    let tasks = message.tasks;

    view! {
        <div class=row_class>
            <div class=bubble_class>
                <p class="chat-text">{message.text}</p>
                {(!tasks.is_empty()).then(|| view! {
                    <div class="chat-tasks">
                        {tasks
                            .into_iter()
                            .map(|task| view! {
                                <div class="chat-task">
                                    <strong>{task.title}</strong>
                                    {format!(" - {}", task.state)}
                                </div>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>
    }
}
