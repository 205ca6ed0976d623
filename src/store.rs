//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task list is
//! only ever replaced wholesale with the backend's latest snapshot.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, User};

/// Where the root controller is in the session lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    CheckingSession,
    Unauthenticated,
    Authenticated,
}

/// Root controller state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub phase: SessionPhase,
    /// Signed-in user, held for the session only
    pub user: Option<User>,
    /// Last full snapshot returned by `GET /tasks`
    pub tasks: Vec<Task>,
    /// Bumped on every login and logout; loads started under an older value are dropped
    pub generation: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current phase (tracked)
pub fn store_phase(store: &AppStore) -> SessionPhase {
    store.phase().get()
}

/// Current phase without subscribing
pub fn store_phase_untracked(store: &AppStore) -> SessionPhase {
    store.phase().get_untracked()
}

pub fn store_set_phase(store: &AppStore, phase: SessionPhase) {
    store.phase().set(phase);
}

/// Current user (tracked)
pub fn store_user(store: &AppStore) -> Option<User> {
    store.user().get()
}

/// Current task snapshot (tracked)
pub fn store_tasks(store: &AppStore) -> Vec<Task> {
    store.tasks().get()
}

/// Replace the task snapshot with a fresh one from the backend
pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Session generation without subscribing
pub fn store_generation_untracked(store: &AppStore) -> u64 {
    store.generation().get_untracked()
}

/// Accept a snapshot loaded under `generation`.
///
/// Returns `false` and leaves the store alone when the session it was requested
/// for has ended since, even if a new one has begun.
pub fn store_accept_tasks(store: &AppStore, generation: u64, tasks: Vec<Task>) -> bool {
    if store_generation_untracked(store) != generation || store_phase_untracked(store) != SessionPhase::Authenticated {
        return false;
    }
    store_replace_tasks(store, tasks);
    true
}

/// Move into the authenticated phase for `user`
pub fn store_enter_session(store: &AppStore, user: User) {
    store.generation().update(|g| *g += 1);
    store.user().set(Some(user));
    store.phase().set(SessionPhase::Authenticated);
}

/// Drop all session state and return to the auth screen
pub fn store_clear_session(store: &AppStore) {
    store.generation().update(|g| *g += 1);
    store.user().set(None);
    store.tasks().write().clear();
    store.phase().set(SessionPhase::Unauthenticated);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskState;

    fn user(name: &str) -> User {
        User {
            id: None,
            username: name.into(),
            email: format!("{}@example.com", name),
        }
    }

    fn task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.into(),
            description: None,
            state: TaskState::NotStarted,
            created_at: "2024-01-15T10:30:00".into(),
            updated_at: None,
            owner_id: None,
        }
    }

    #[test]
    fn test_enter_session() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        assert_eq!(store_phase_untracked(&store), SessionPhase::CheckingSession);

        store_enter_session(&store, user("alice"));
        assert_eq!(store_phase_untracked(&store), SessionPhase::Authenticated);
        assert_eq!(store.user().get_untracked().map(|u| u.username), Some("alice".to_string()));
    }

    #[test]
    fn test_clear_session_drops_everything() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        store_enter_session(&store, user("alice"));
        store_replace_tasks(&store, vec![task(1, "Buy milk"), task(2, "Walk dog")]);

        store_clear_session(&store);
        assert_eq!(store_phase_untracked(&store), SessionPhase::Unauthenticated);
        assert_eq!(store.user().get_untracked(), None);
        assert!(store.tasks().get_untracked().is_empty());
    }

    #[test]
    fn test_load_from_current_session_is_accepted() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        store_enter_session(&store, user("alice"));

        let generation = store_generation_untracked(&store);
        assert!(store_accept_tasks(&store, generation, vec![task(1, "Buy milk")]));
        assert_eq!(store.tasks().get_untracked().len(), 1);
    }

    #[test]
    fn test_load_after_logout_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        store_enter_session(&store, user("alice"));
        let generation = store_generation_untracked(&store);

        store_clear_session(&store);
        assert!(!store_accept_tasks(&store, generation, vec![task(1, "Buy milk")]));
        assert!(store.tasks().get_untracked().is_empty());
    }

    #[test]
    fn test_load_from_previous_session_is_dropped_after_relogin() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        store_enter_session(&store, user("alice"));
        let stale = store_generation_untracked(&store);

        store_clear_session(&store);
        store_enter_session(&store, user("bob"));
        store_replace_tasks(&store, vec![task(7, "Bob's task")]);

        assert!(!store_accept_tasks(&store, stale, vec![task(1, "Alice's task")]));
        let tasks = store.tasks().get_untracked();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Bob's task");
    }
}
