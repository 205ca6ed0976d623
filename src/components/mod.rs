//! UI Components
//!
//! Leptos components composed by the root controller.

mod ai_chat;
mod auth_view;
mod delete_confirm_button;
mod task_card;
mod task_form;
mod task_list;
mod task_stats;

pub use ai_chat::AiChat;
pub use auth_view::AuthView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_stats::TaskStatsPanel;
