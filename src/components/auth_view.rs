//! Auth View Component
//!
//! Login / register screen. Signals the parent once a token is stored.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{self, AuthForm, AuthMode, AUTH_FAILED};

#[component]
pub fn AuthView(#[prop(into)] on_authenticated: Callback<()>) -> impl IntoView {
    let client = use_api();

    let mode = RwSignal::new(AuthMode::Login);
    let form = RwSignal::new(AuthForm::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current_mode = mode.get_untracked();
        let credentials = form.get_untracked();
        if let Err(message) = credentials.validate(current_mode) {
            error.set(Some(message.to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);
        let client = client.clone();
        spawn_local(async move {
            let outcome = auth::authenticate(&client, current_mode, &credentials).await;
            submitting.set(false);
            match outcome {
                Ok(()) => on_authenticated.run(()),
                Err(err) => error.set(Some(err.user_message(AUTH_FAILED))),
            }
        });
    };

    let toggle_mode = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(None);
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Task Manager AI"</h1>
                    <p class="subtitle">"Manage your tasks with natural language"</p>
                </div>

                <form class="auth-form" on:submit=submit>
                    <label>
                        "Username"
                        <input
                            type="text"
                            placeholder="Enter username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.username = value);
                            }
                        />
                    </label>

                    <Show when=move || mode.get() == AuthMode::Register>
                        <label>
                            "Email"
                            <input
                                type="email"
                                placeholder="Enter email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.email = value);
                                }
                            />
                        </label>
                    </Show>

                    <label>
                        "Password"
                        <input
                            type="password"
                            placeholder="Minimum 6 characters"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                        />
                    </label>

                    {move || error.get().map(|message| view! { <div class="auth-error">{message}</div> })}

                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <div class="auth-switch">
                    <button type="button" class="link-btn" on:click=toggle_mode>
                        {move || mode.get().switch_prompt()}
                    </button>
                </div>
            </div>
        </div>
    }
}
