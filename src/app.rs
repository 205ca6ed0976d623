//! Task Pilot Frontend App
//!
//! Root controller: owns the session lifecycle and the task snapshot, and
//! re-fetches the full task list after every mutation.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::auth;
use crate::components::{AiChat, AuthView, TaskForm, TaskList, TaskStatsPanel};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::dialog;
use crate::error::ApiError;
use crate::filter::StateFilter;
use crate::models::{NewTask, TaskState, TaskUpdate};
use crate::session::{LocalStorageTokenStore, Session};
use crate::store::{
    store_accept_tasks, store_clear_session, store_enter_session, store_generation_untracked, store_phase,
    store_set_phase, store_tasks, store_user, use_app_store, AppState, AppStore, SessionPhase,
};

/// Resolve the stored token to a user and enter the matching phase
fn begin_session(client: ApiClient, store: AppStore) {
    store_set_phase(&store, SessionPhase::CheckingSession);
    spawn_local(async move { resolve_session(&client, &store).await });
}

async fn resolve_session(client: &ApiClient, store: &AppStore) {
    match auth::resume_session(client).await {
        Some(user) => {
            log::info!("[APP] Session active for {}", user.username);
            store_enter_session(store, user);
        }
        None => store_set_phase(store, SessionPhase::Unauthenticated),
    }
}

/// Fetch the full task list for the current session
async fn load_tasks(client: &ApiClient, store: &AppStore) {
    let generation = store_generation_untracked(store);
    match client.list_tasks().await {
        Ok(tasks) => {
            let count = tasks.len();
            if store_accept_tasks(store, generation, tasks) {
                log::debug!("[APP] Loaded {} tasks", count);
            } else {
                log::debug!("[APP] Dropped tasks loaded for an ended session");
            }
        }
        Err(err) => log::error!("[APP] Failed to load tasks: {}", err),
    }
}

/// Log out locally: no server call
fn end_session(client: &ApiClient, store: &AppStore) {
    client.session().clear();
    store_clear_session(store);
    log::info!("[APP] Logged out");
}

/// Run a task mutation and follow a success with exactly one full reload.
///
/// A failure triggers nothing and yields the message to show the user.
async fn mutate<T>(
    request: impl Future<Output = Result<T, ApiError>>,
    ctx: AppContext,
    fallback: &str,
) -> Result<(), String> {
    match request.await {
        Ok(_) => {
            ctx.reload();
            Ok(())
        }
        Err(err) => {
            log::warn!("[APP] {}: {}", fallback, err);
            Err(err.user_message(fallback))
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    let client = ApiClient::new(&config, Session::new(LocalStorageTokenStore::new(config.token_key.clone())));
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (filter, set_filter) = signal(StateFilter::All);

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);
    provide_context(store);
    provide_context(client.clone());

    begin_session(client.clone(), store);

    // Load tasks on entering the session and whenever a reload is triggered
    Effect::new({
        let client = client.clone();
        move |_| {
            let trigger = ctx.reload_trigger.get();
            if store_phase(&store) != SessionPhase::Authenticated {
                return;
            }
            log::debug!("[APP] Loading tasks, trigger={}", trigger);
            let client = client.clone();
            spawn_local(async move { load_tasks(&client, &store).await });
        }
    });

    let on_authenticated = Callback::new({
        let client = client.clone();
        move |_: ()| begin_session(client.clone(), store)
    });

    let on_logout = Callback::new({
        let client = client.clone();
        move |_: ()| end_session(&client, &store)
    });

    let on_create = Callback::new({
        let client = client.clone();
        move |task: NewTask| {
            let client = client.clone();
            spawn_local(async move {
                if let Err(message) = mutate(client.create_task(&task), ctx, "Failed to create task").await {
                    dialog::alert(&message);
                }
            });
        }
    });

    let on_advance = Callback::new({
        let client = client.clone();
        move |(id, next): (u32, TaskState)| {
            let client = client.clone();
            spawn_local(async move {
                let update = TaskUpdate::state(next);
                if let Err(message) = mutate(client.update_task(id, &update), ctx, "Failed to update task").await {
                    dialog::alert(&message);
                }
            });
        }
    });

    let on_delete = Callback::new({
        let client = client.clone();
        move |id: u32| {
            let client = client.clone();
            spawn_local(async move {
                if let Err(message) = mutate(client.delete_task(id), ctx, "Failed to delete task").await {
                    dialog::alert(&message);
                }
            });
        }
    });

    let on_tasks_changed = Callback::new(move |_: ()| ctx.reload());
    let tasks = Signal::derive(move || store_tasks(&store));

    view! {
        {move || match store_phase(&store) {
            SessionPhase::CheckingSession => view! {
                <div class="loading-screen">"Loading..."</div>
            }.into_any(),
            SessionPhase::Unauthenticated => view! {
                <AuthView on_authenticated=on_authenticated />
            }.into_any(),
            SessionPhase::Authenticated => view! {
                <div class="app-layout">
                    <AppHeader on_logout=on_logout />
                    <main class="main-content">
                        <section class="task-column">
                            <TaskStatsPanel tasks=tasks />
                            <TaskForm on_submit=on_create />
                            <TaskList
                                tasks=tasks
                                filter=filter
                                set_filter=set_filter
                                on_advance=on_advance
                                on_delete=on_delete
                            />
                        </section>
                        <aside class="chat-column">
                            <AiChat on_tasks_changed=on_tasks_changed />
                        </aside>
                    </main>
                </div>
            }.into_any(),
        }}
    }
}

/// Title bar with the signed-in user and a logout button
#[component]
fn AppHeader(on_logout: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="app-header">
            <div class="brand">
                <h1>"Task Manager AI"</h1>
                <p class="subtitle">"Intelligent Task Management"</p>
            </div>
            <div class="user-area">
                {move || store_user(&store).map(|user| view! {
                    <div class="user-badge">
                        <p class="username">{user.username}</p>
                        <p class="email">{user.email}</p>
                    </div>
                })}
                <button class="logout-btn" on:click=move |_| on_logout.run(())>"Logout"</button>
            </div>
        </header>
    }
}
