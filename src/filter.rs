//! Task Filtering
//!
//! Client-side view filter over the task snapshot.

use crate::models::{Task, TaskState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateFilter {
    #[default]
    All,
    Only(TaskState),
}

impl StateFilter {
    /// Options in the order shown by the filter select
    pub const OPTIONS: [StateFilter; 4] = [
        StateFilter::All,
        StateFilter::Only(TaskState::NotStarted),
        StateFilter::Only(TaskState::InProgress),
        StateFilter::Only(TaskState::Completed),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StateFilter::All => "All",
            StateFilter::Only(state) => state.label(),
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "All" => Some(StateFilter::All),
            _ => TaskState::from_label(s).map(StateFilter::Only),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(state) => task.state == *state,
        }
    }

    /// Matching tasks, in snapshot order
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }

    pub fn empty_message(&self) -> String {
        match self {
            StateFilter::All => "No tasks yet. Create one to get started!".to_string(),
            StateFilter::Only(state) => format!("No tasks in \"{}\" state.", state),
        }
    }
}
